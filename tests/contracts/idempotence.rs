//! Contracts for prepare/compile memoization.

use std::fs;

use ember_lift::domain::ports::PathResolver;

use crate::common::*;

/// CONTRACT: prepare N times leaves the same state as prepare once
///
/// One namespace entry in each host list, one link, no errors.
#[test]
fn contract_prepare_is_idempotent() {
    let host = TestHost::new("development");
    let (controller, _build) = host.app("frontend");

    for _ in 0..3 {
        controller.prepare().expect("prepare must not fail when repeated");
    }

    assert_eq!(host.registry.precompile_patterns().len(), 1);
    assert_eq!(host.registry.digest_whitelist().len(), 1);
    assert_eq!(host.registry.precompile_patterns()[0].prefix(), "frontend/");

    let link = controller.paths().app_assets();
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
}

/// CONTRACT: a second controller for the same target re-runs prepare safely
///
/// Memoization is per instance; a new worker finds the link already present.
#[test]
fn contract_prepare_in_new_worker_tolerates_existing_link() {
    let host = TestHost::new("development");
    let target = host.target("frontend");

    host.controller(&target, host.fake_build(&target))
        .prepare()
        .unwrap();
    host.controller(&target, host.fake_build(&target))
        .prepare()
        .expect("existing link must be treated as success");

    let link = host.paths(&target).app_assets();
    assert_eq!(fs::read_link(link).unwrap(), host.paths(&target).dist());
}

/// CONTRACT: compile builds once per controller; compiled implies prepared
#[test]
fn contract_compile_is_memoized() {
    let host = TestHost::new("development");
    let (controller, build) = host.app("frontend");

    assert!(controller.compile().unwrap());
    assert!(controller.compile().unwrap());

    assert_eq!(build.compiles(), 1);
    let state = controller.state();
    assert!(state.is_compiled() && state.is_prepared());
}

/// CONTRACT: a failed compile is not memoized
#[test]
fn contract_failed_compile_is_retried() {
    let host = TestHost::new("development");
    let (controller, build) = host.app("frontend");
    build.push(BuildStep::Fail(FAILURE_REPORT.to_string()));

    assert!(controller.compile().is_err());
    assert!(!controller.state().is_compiled());

    // The developer fixes the code; the addon clears its error file on the next build.
    fs::remove_file(controller.paths().build_error_file()).unwrap();
    assert!(controller.compile().unwrap());
    assert_eq!(build.compiles(), 2);
}
