//! Controller Factory
//!
//! Creates build controllers with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{BuildController, ControllerPorts};
use crate::config::Config;
use crate::domain::ports::AssetRegistry;
use crate::error::EmberResult;
use crate::infrastructure::{HtmlPage, LocalFs, PackageJsonReader, PathSet, Shell};

/// Type alias for the concrete BuildController with all dependencies
pub type ConcreteBuildController = BuildController<LocalFs>;

/// A wired controller plus the shell that owns its dev server
pub struct AppHandle {
    pub controller: ConcreteBuildController,
    pub shell: Arc<Shell>,
}

/// Create the controller for `[apps.<name>]`
///
/// `cwd` anchors a relative host root. `registry` is shared by every app of
/// one host so their namespaces land in the same lists.
pub fn create_app(
    config: &Config,
    cwd: &Path,
    name: &str,
    registry: Arc<dyn AssetRegistry>,
) -> EmberResult<AppHandle> {
    let target = config.target(name)?;
    let host = config.host_config(cwd);
    let paths = PathSet::new(&host, &target);
    let shell = Arc::new(Shell::new(
        name,
        &paths,
        host.environment(),
        config.commands.to_shell_commands(),
    ));

    let ports = ControllerPorts {
        paths: Arc::new(paths),
        runner: shell.clone(),
        templater: Arc::new(HtmlPage::new()),
        registry,
        manifest: Arc::new(PackageJsonReader::new()),
    };

    let controller = BuildController::new(target, host, ports, LocalFs::new())
        .with_wait_options(config.wait.to_options());

    Ok(AppHandle { controller, shell })
}

/// Create the controller for `[apps.<name>]` without keeping the shell handle
pub fn create_controller(
    config: &Config,
    cwd: &Path,
    name: &str,
    registry: Arc<dyn AssetRegistry>,
) -> EmberResult<ConcreteBuildController> {
    create_app(config, cwd, name, registry).map(|app| app.controller)
}
