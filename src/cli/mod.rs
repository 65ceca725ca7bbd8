//! Command line interface for rtag.
//!
//! Resolves the language, parses arguments with localized help and
//! dispatches to the command executors.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, STORE_FILE_ENV, localized_command};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::config::RtagConfig;
use crate::error::Result;
use crate::i18n;
use crate::runtime::RuntimeConfig;
use crate::store::DEFAULT_STORE_FILE;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let mut config = RtagConfig::resolve(DEFAULT_STORE_FILE);
    let args = Args::parse_localized(i18n::messages(config.language));
    config.store_path = args.file.clone();

    log::debug!("Using tag file {}", config.store_path.display());
    execute_command(&args.command, &RuntimeConfig::new(config)).await
}
