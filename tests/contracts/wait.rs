//! Contracts for the lockfile wait loop.

use std::thread;
use std::time::{Duration, Instant};

use ember_lift::domain::ports::PathResolver;
use ember_lift::WaitOptions;

use crate::common::*;

const POLL: Duration = Duration::from_millis(20);
const SAFETY_TIMEOUT: Duration = Duration::from_secs(10);

fn options() -> WaitOptions {
    WaitOptions::new()
        .with_poll_interval(POLL)
        .with_timeout(SAFETY_TIMEOUT)
}

/// CONTRACT: wait blocks while the lockfile exists and returns soon after it goes
#[test]
fn contract_wait_blocks_until_lock_released() {
    let host = TestHost::new("development");
    let target = host.target("frontend");
    let paths = host.paths(&target);
    let controller = host.controller(&target, host.fake_build(&target));
    hold_lock(&paths);

    let releaser = {
        let paths = paths.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            release_lock(&paths);
            Instant::now()
        })
    };

    let started = Instant::now();
    controller.wait_with(options()).unwrap();
    let returned = Instant::now();
    let released = releaser.join().unwrap();

    assert!(started.elapsed() >= Duration::from_millis(150));
    assert!(
        returned.saturating_duration_since(released) < POLL * 10,
        "wait returned {:?} after release",
        returned.saturating_duration_since(released)
    );
}

/// CONTRACT: a failure reported mid-build ends the wait with the build error
#[test]
fn contract_wait_raises_on_error_while_locked() {
    let host = TestHost::new("development");
    let target = host.target("frontend");
    let paths = host.paths(&target);
    let controller = host.controller(&target, host.fake_build(&target));
    hold_lock(&paths);

    let writer = {
        let paths = paths.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            write_error(&paths, "Error: foo\nat bar.js:1\n");
        })
    };

    let err = controller.wait_with(options()).unwrap_err();
    writer.join().unwrap();

    assert!(err.is_build_failure(), "unexpected error: {err}");
    assert!(paths.lockfile().exists(), "lockfile is never touched by wait");
}

/// CONTRACT: without a lockfile, wait returns at once
#[test]
fn contract_wait_without_build_returns_immediately() {
    let host = TestHost::new("development");
    let (controller, _build) = host.app("frontend");

    let started = Instant::now();
    controller.wait().unwrap();

    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(!controller.is_building());
}

/// CONTRACT: a configured timeout yields a distinguishable outcome
#[test]
fn contract_wait_timeout_is_distinguishable() {
    let host = TestHost::new("development");
    let target = host.target("frontend");
    hold_lock(&host.paths(&target));
    let controller = host
        .controller(&target, host.fake_build(&target))
        .with_wait_options(
            WaitOptions::new()
                .with_poll_interval(POLL)
                .with_timeout(Duration::from_millis(100)),
        );

    let err = controller.wait().unwrap_err();

    assert!(err.is_wait_timeout());
    assert!(!err.is_build_failure());
}
