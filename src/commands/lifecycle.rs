//! Lifecycle command handlers
//!
//! install, compile, run, test and wait. Each app is attempted even if an
//! earlier one fails; the command fails if any app did.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::warn;

use ember_lift::error::{EmberError, EmberResult};
use ember_lift::presentation::output::{render_step, StepOutcome};
use ember_lift::presentation::AppHandle;

use super::CommandContext;

const RUN_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn cmd_install(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    for_each_app(ctx, apps, "install", |app| {
        app.controller.install_dependencies()?;
        Ok(None)
    })
}

pub fn cmd_compile(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    for_each_app(ctx, apps, "compile", |app| {
        app.controller.compile()?;
        Ok(Some(app.controller.index_file().display().to_string()))
    })
}

pub fn cmd_test(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    for_each_app(ctx, apps, "test", |app| {
        app.controller.run_tests()?;
        Ok(None)
    })
}

pub fn cmd_wait(ctx: &CommandContext, apps: &[String], timeout_ms: Option<u64>) -> Result<()> {
    let mut options = ctx.config.wait.to_options();
    if let Some(ms) = timeout_ms {
        options = options.with_timeout(Duration::from_millis(ms));
    }

    for_each_app(ctx, apps, "wait", |app| {
        app.controller.wait_with(options)?;
        Ok(None)
    })
}

/// Start every dev server, then supervise them until Ctrl+C
pub fn cmd_run(ctx: &CommandContext, apps: &[String]) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_handler = running.clone();
    ctrlc::set_handler(move || {
        running_handler.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let mut handles: Vec<AppHandle> = Vec::new();
    for name in ctx.select_apps(apps)? {
        let app = ctx.app(&name)?;
        let result = app.controller.run().map(|()| {
            Some(format!("logging to {}", app.shell.log_file().display()))
        });
        if report(ctx, &name, "run", result) {
            handles.push(app);
        }
    }

    if handles.is_empty() {
        bail!("no dev server could be started");
    }
    if !ctx.is_json() {
        println!("Press Ctrl+C to stop");
    }

    while running.load(Ordering::SeqCst) && !handles.is_empty() {
        thread::sleep(RUN_POLL_INTERVAL);
        handles.retain(|app| {
            if app.controller.is_running() {
                return true;
            }
            let message = match app.controller.has_build_error() {
                Ok(true) => "dev server exited with a build error",
                _ => "dev server exited",
            };
            report(
                ctx,
                app.controller.name(),
                "run",
                Err(EmberError::Process {
                    name: app.controller.name().to_string(),
                    command: "build --watch".to_string(),
                    message: message.to_string(),
                }),
            );
            false
        });
    }

    for app in &handles {
        if let Err(err) = app.shell.stop() {
            warn!(app = app.controller.name(), error = %err, "failed to stop dev server");
        }
    }

    Ok(())
}

fn for_each_app<F>(ctx: &CommandContext, apps: &[String], step: &str, action: F) -> Result<()>
where
    F: Fn(&AppHandle) -> EmberResult<Option<String>>,
{
    let mut failed = 0usize;
    for name in ctx.select_apps(apps)? {
        let result = ctx.app(&name).and_then(|app| action(&app));

        if !report(ctx, &name, step, result) {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{step} failed for {failed} app(s)");
    }
    Ok(())
}

/// Render one step result; returns whether it succeeded
fn report(
    ctx: &CommandContext,
    name: &str,
    step: &str,
    result: EmberResult<Option<String>>,
) -> bool {
    match result {
        Ok(message) => {
            render_step(
                ctx.format,
                &StepOutcome {
                    app: name,
                    step,
                    ok: true,
                    message,
                },
            );
            true
        }
        Err(err) => {
            render_step(
                ctx.format,
                &StepOutcome {
                    app: name,
                    step,
                    ok: false,
                    message: Some(err.to_string()),
                },
            );
            if let (false, Some(build)) = (ctx.is_json(), err.as_build_error()) {
                for line in build.trace().iter().skip(1) {
                    eprintln!("    {}", line);
                }
            }
            false
        }
    }
}
