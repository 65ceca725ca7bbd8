//! Command line argument parsing.
//!
//! The clap derive gives the structure; about texts are swapped for the
//! active message table before parsing so `--help` is localized.

use crate::i18n::Messages;
use crate::store::DEFAULT_STORE_FILE;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable overriding the tag file path
pub const STORE_FILE_ENV: &str = "RTAG_FILE";

/// A CLI tool for managing release tags
#[derive(Parser, Debug)]
#[command(name = "rtag", version)]
pub struct Args {
    /// Tag file path
    #[arg(
        long,
        global = true,
        env = STORE_FILE_ENV,
        default_value = DEFAULT_STORE_FILE,
        value_name = "PATH"
    )]
    pub file: PathBuf,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show stored tags, or add tags interactively when there are none
    Init,

    /// Add a tag; prompts interactively when no tag is given
    Add {
        /// Tag to add
        tag: Option<String>,
    },

    /// Create timestamped release tags and push them to origin
    Push {
        /// Stored tag to release
        tag: Option<String>,

        /// Release every stored tag
        #[arg(long)]
        all: bool,
    },

    /// List stored tags
    #[command(visible_alias = "ls")]
    List {
        /// Print the tags as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Remove a stored tag
    Rm {
        /// Tag to remove
        tag: String,
    },

    /// Show or set the interface language
    Lang {
        /// Language code or name
        language: Option<String>,
    },
}

impl Args {
    /// Parse the process arguments with help texts from `messages`.
    ///
    /// Exits the process on `--help`, `--version` and usage errors, as clap
    /// does.
    pub fn parse_localized(messages: &'static Messages) -> Self {
        let matches = localized_command(messages).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` with help texts from `messages`, without exiting
    pub fn try_parse_localized<I, T>(messages: &'static Messages, args: I) -> clap::error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = localized_command(messages).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

impl Command {
    /// Get command name for display
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Add { .. } => "add",
            Command::Push { .. } => "push",
            Command::List { .. } => "list",
            Command::Rm { .. } => "rm",
            Command::Lang { .. } => "lang",
        }
    }
}

/// The clap command tree with about texts taken from `messages`
pub fn localized_command(messages: &'static Messages) -> clap::Command {
    Args::command()
        .about(messages.root_short)
        .long_about(messages.root_long)
        .mut_subcommand("init", |cmd| {
            cmd.about(messages.init_short).long_about(messages.init_long)
        })
        .mut_subcommand("add", |cmd| {
            cmd.about(messages.add_short).long_about(messages.add_long)
        })
        .mut_subcommand("push", |cmd| {
            cmd.about(messages.push_short)
                .long_about(messages.push_long)
                .mut_arg("all", |arg| arg.help(messages.push_all_flag))
        })
        .mut_subcommand("list", |cmd| {
            cmd.about(messages.list_short).long_about(messages.list_long)
        })
        .mut_subcommand("rm", |cmd| {
            cmd.about(messages.rm_short).long_about(messages.rm_long)
        })
        .mut_subcommand("lang", |cmd| {
            cmd.about(messages.lang_short).long_about(messages.lang_long)
        })
}
