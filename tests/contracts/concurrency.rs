//! Contracts for workers racing on the same target.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use ember_lift::domain::ports::PathResolver;

use crate::common::*;

/// CONTRACT: independent controllers preparing at once all succeed
///
/// The resulting link is the same as after a single prepare.
#[test]
fn contract_concurrent_prepare_race() {
    const WORKERS: usize = 8;

    let host = Arc::new(TestHost::new("production"));
    let target = host.target("frontend");
    let barrier = Arc::new(Barrier::new(WORKERS));

    let workers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let host = host.clone();
            let target = target.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let controller = host.controller(&target, host.fake_build(&target));
                barrier.wait();
                controller.prepare()
            })
        })
        .collect();

    for worker in workers {
        worker
            .join()
            .expect("worker panicked")
            .expect("prepare must tolerate a concurrent link");
    }

    let paths = host.paths(&target);
    let link = paths.app_assets();
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), paths.dist());
    assert_eq!(fs::read_dir(link.parent().unwrap()).unwrap().count(), 1);
}

/// CONTRACT: threads sharing one controller build once
#[test]
fn contract_shared_controller_compiles_once() {
    const THREADS: usize = 4;

    let host = TestHost::new("production");
    let (controller, build) = host.app("frontend");
    let controller = Arc::new(controller);
    let barrier = Arc::new(Barrier::new(THREADS));

    let threads: Vec<_> = (0..THREADS)
        .map(|_| {
            let controller = controller.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                controller.compile()
            })
        })
        .collect();

    for handle in threads {
        assert!(handle.join().unwrap().unwrap());
    }

    assert_eq!(build.compiles(), 1);
    assert_eq!(host.registry.precompile_patterns().len(), 1);
    assert_eq!(
        fs::read_to_string(host.path("public/_apps/frontend.html")).unwrap(),
        INDEX_HTML
    );
}
