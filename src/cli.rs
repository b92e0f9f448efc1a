use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ember Lift - drive ember-cli builds from a host web application
#[derive(Parser, Debug)]
#[command(name = "ember-lift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Apps are configured under [apps.<name>] in ember-lift.toml.")]
pub struct Cli {
    /// Path to ember-lift.toml (default: <root>/ember-lift.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Host application root (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install front-end dependencies
    Install {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Build once and cache index.html in production-like environments
    Compile {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Start dev servers and keep them running until Ctrl+C
    Run {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Run the front-end test suite
    Test {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Block until running builds release their lockfile
    Wait {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,

        /// Give up after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Show build state as seen from the file system
    Status {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Print the logical asset paths to include in pages
    Assets {
        /// Apps to act on (default: every configured app)
        apps: Vec<String>,
    },

    /// Print the built index.html with optional head/body fragments
    Index {
        /// App to render
        app: String,

        /// Markup inserted before </head>
        #[arg(long, default_value = "")]
        head: String,

        /// Markup inserted before </body>
        #[arg(long, default_value = "")]
        body: String,
    },
}
