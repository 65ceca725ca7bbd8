//! `git` subprocess implementation of the git capabilities.

use crate::error::{GitError, Result};
use crate::git::{Pusher, TagCreator};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs the `git` executable with inherited stdout/stderr.
///
/// Git's own progress and error output is shown to the user as is; only the
/// exit status is inspected. There is no timeout.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Locate `git` on `PATH`
    pub fn discover() -> Result<Self> {
        let program = which::which("git").map_err(|e| {
            log::debug!("git lookup failed: {}", e);
            GitError::NotInstalled
        })?;
        log::debug!("Using git at {}", program.display());
        Ok(Self::with_program(program))
    }

    /// Use a specific git executable
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run git in `dir` instead of the current directory
    pub fn current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    async fn run(&self, args: &[&str]) -> Result<ExitStatus> {
        let command_line = format!("git {}", args.join(" "));
        log::info!("Running: {}", command_line);

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .await
            .map_err(|source| GitError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        log::debug!("{} exited with {}", command_line, status);
        Ok(status)
    }
}

impl TagCreator for GitCli {
    async fn create_tag(&self, name: &str) -> Result<()> {
        let status = self.run(&["tag", name]).await?;
        if !status.success() {
            return Err(GitError::TagCreationFailed {
                tag: name.to_string(),
                status,
            }
            .into());
        }
        Ok(())
    }
}

impl Pusher for GitCli {
    async fn push_tags(&self, remote: &str) -> Result<()> {
        let status = self.run(&["push", remote, "--tags"]).await?;
        if !status.success() {
            return Err(GitError::PushFailed {
                remote: remote.to_string(),
                status,
            }
            .into());
        }
        Ok(())
    }
}
