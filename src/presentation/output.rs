//! Output Rendering
//!
//! Text for humans, one JSON object per line for scripts.

use std::path::PathBuf;

use serde::Serialize;

use crate::application::BuildController;
use crate::config::ConfigWarning;
use crate::domain::ports::FileSystem;
use crate::error::EmberResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Snapshot of one app's lifecycle as seen from the file system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppStatus {
    pub name: String,
    pub environment: String,
    pub vendor_assets: String,
    pub application_assets: Option<String>,
    pub index_file: PathBuf,
    pub building: bool,
    pub build_error: bool,
    pub running: bool,
}

impl AppStatus {
    pub fn collect<FS: FileSystem>(controller: &BuildController<FS>) -> EmberResult<Self> {
        Ok(Self {
            name: controller.name().to_string(),
            environment: controller.host().environment().name().to_string(),
            vendor_assets: controller.vendor_assets(),
            // package.json may not exist before the first install
            application_assets: controller.application_assets().ok(),
            index_file: controller.index_file(),
            building: controller.is_building(),
            build_error: controller.has_build_error()?,
            running: controller.is_running(),
        })
    }
}

/// Lifecycle step outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome<'a> {
    pub app: &'a str,
    pub step: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn render_step(format: OutputFormat, outcome: &StepOutcome<'_>) {
    match format {
        OutputFormat::Json => print_json(outcome),
        OutputFormat::Text => {
            let icon = if outcome.ok { "✓" } else { "✗" };
            match &outcome.message {
                Some(message) => {
                    println!("{} {} {}: {}", icon, outcome.app, outcome.step, message)
                }
                None => println!("{} {} {}", icon, outcome.app, outcome.step),
            }
        }
    }
}

pub fn render_status(format: OutputFormat, status: &AppStatus) {
    match format {
        OutputFormat::Json => print_json(status),
        OutputFormat::Text => {
            println!("{} ({})", status.name, status.environment);
            println!("  vendor assets:      {}", status.vendor_assets);
            println!(
                "  application assets: {}",
                status
                    .application_assets
                    .as_deref()
                    .unwrap_or("(package.json unreadable)")
            );
            println!("  index file:         {}", status.index_file.display());
            println!("  building:           {}", yes_no(status.building));
            println!("  build error:        {}", yes_no(status.build_error));
            println!("  dev server:         {}", yes_no(status.running));
        }
    }
}

/// Exposed asset paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExposedAssets {
    pub app: String,
    pub js: Vec<String>,
    pub css: Vec<String>,
}

pub fn render_assets(format: OutputFormat, assets: &ExposedAssets) {
    match format {
        OutputFormat::Json => print_json(assets),
        OutputFormat::Text => {
            for path in &assets.js {
                println!("js  {}", path);
            }
            for path in &assets.css {
                println!("css {}", path);
            }
        }
    }
}

pub fn render_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!("⚠ {}", warning);
        if let Some(suggestion) = &warning.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{}", line),
        Err(err) => eprintln!("failed to encode output: {}", err),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
