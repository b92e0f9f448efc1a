//! Process runners for the external build tool

mod shell;

pub use shell::{Shell, ShellCommands, DEFAULT_INSTALL_COMMAND};
