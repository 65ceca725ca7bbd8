//! Command executors.
//!
//! Each executor returns the process exit code on completion. Errors it
//! returns are printed here with the command's localized failure wording and
//! become exit code 1.

mod add;
mod helpers;
mod init;
mod lang;
mod list;
mod push;
mod rm;

use crate::cli::Command;
use crate::error::Result;
use crate::runtime::RuntimeConfig;

use add::execute_add;
use helpers::{failure_message, print_recovery_suggestions};
use init::execute_init;
use lang::execute_lang;
use list::execute_list;
use push::execute_push;
use rm::execute_rm;

/// Execute `command` and map its outcome to an exit code
pub async fn execute_command(command: &Command, config: &RuntimeConfig) -> Result<i32> {
    let result = match command {
        Command::Init => execute_init(config),
        Command::Add { tag } => execute_add(config, tag.as_deref()),
        Command::Push { tag, all } => execute_push(config, tag.as_deref(), *all).await,
        Command::List { json } => execute_list(config, *json),
        Command::Rm { tag } => execute_rm(config, tag),
        Command::Lang { language } => execute_lang(config, language.as_deref()),
    };

    match result {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            log::debug!("Command '{}' failed: {:?}", command.name(), e);
            config.error_println(&failure_message(config.messages(), command, &e));
            print_recovery_suggestions(config, &e);
            Ok(1)
        }
    }
}
