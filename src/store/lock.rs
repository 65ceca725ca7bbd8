//! Advisory lock guarding read-modify-write cycles on the tag file.

use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long to wait for another process to release the lock
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay between lock attempts
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Exclusive lock on a sidecar lock file.
///
/// The flock is held for as long as this guard lives. The lock file is never
/// removed, so every process locks the same inode.
pub(crate) struct StoreLock {
    path: PathBuf,
    #[cfg(unix)]
    _handle: nix::fcntl::Flock<fs::File>,
    #[cfg(not(unix))]
    _handle: fs::File,
}

impl StoreLock {
    /// Acquire the lock at `path`, waiting up to [`LOCK_TIMEOUT`]
    pub(crate) fn acquire(path: &Path) -> Result<Self, StoreError> {
        Self::acquire_within(path, LOCK_TIMEOUT)
    }

    /// Acquire the lock at `path`, waiting up to `timeout`
    pub(crate) fn acquire_within(path: &Path, timeout: Duration) -> Result<Self, StoreError> {
        let started = Instant::now();

        loop {
            let file = fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map_err(|e| StoreError::LockFailed {
                    path: path.to_path_buf(),
                    reason: format!("failed to open lock file: {}", e),
                })?;

            #[cfg(unix)]
            {
                use nix::fcntl::{Flock, FlockArg};

                match Flock::lock(file, FlockArg::LockExclusiveNonblock) {
                    Ok(handle) => {
                        log::debug!("Acquired store lock {}", path.display());
                        return Ok(Self {
                            path: path.to_path_buf(),
                            _handle: handle,
                        });
                    }
                    Err((file, errno)) if errno == nix::errno::Errno::EWOULDBLOCK => {
                        drop(file);
                        if started.elapsed() >= timeout {
                            return Err(StoreError::LockFailed {
                                path: path.to_path_buf(),
                                reason: "timeout waiting for file lock".to_string(),
                            });
                        }
                        log::debug!("Store lock held by another process, waiting...");
                        std::thread::sleep(LOCK_RETRY_DELAY);
                    }
                    Err((_, errno)) => {
                        return Err(StoreError::LockFailed {
                            path: path.to_path_buf(),
                            reason: format!("flock error: {}", errno),
                        });
                    }
                }
            }

            // No advisory locking here; concurrent writers race and the last one wins.
            #[cfg(not(unix))]
            {
                let _ = (started, timeout);
                return Ok(Self {
                    path: path.to_path_buf(),
                    _handle: file,
                });
            }
        }
    }
}

impl std::fmt::Debug for StoreLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreLock").field("path", &self.path).finish()
    }
}
