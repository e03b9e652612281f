//! Scoped guard for externally spawned processes.
//!
//! Used to boot a dev server (or similar helper) for integration runs. The
//! child is a scoped resource: `kill_on_drop` guarantees termination on every
//! exit path, and on Linux the kernel delivers SIGTERM to the child if this
//! process dies without dropping (SIGKILL, OOM kill).

use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::debug;

/// Errors managing a scoped process
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to spawn {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} exited early with {status}")]
    ExitedEarly {
        name: String,
        status: std::process::ExitStatus,
    },

    #[error("{name} not ready after {waited:?}")]
    ReadyTimeout { name: String, waited: Duration },

    #[error("i/o error managing {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A child process that cannot outlive its guard.
#[derive(Debug)]
pub struct ScopedProcess {
    name: String,
    child: Child,
}

impl ScopedProcess {
    /// Spawn `program` with `args`, detached from our stdio.
    pub fn spawn(
        name: impl Into<String>,
        program: &str,
        args: &[&str],
    ) -> Result<Self, ProcessError> {
        let name = name.into();

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        // Linux: request kernel to send SIGTERM to child when parent dies.
        // This catches cases where Drop doesn't run (SIGKILL, OOM kill).
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let child = cmd.spawn().map_err(|source| ProcessError::Spawn {
            name: name.clone(),
            source,
        })?;

        debug!("spawned {} (pid {:?})", name, child.id());
        Ok(Self { name, child })
    }

    /// OS pid, while the child is still running.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Poll `probe` until it reports ready, the child exits, or `timeout`
    /// elapses. Polls every 100 ms.
    pub async fn wait_ready<F, Fut>(
        &mut self,
        timeout: Duration,
        mut probe: F,
    ) -> Result<(), ProcessError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        let start = tokio::time::Instant::now();
        loop {
            if let Some(status) = self.try_wait()? {
                return Err(ProcessError::ExitedEarly {
                    name: self.name.clone(),
                    status,
                });
            }
            if probe().await {
                return Ok(());
            }
            if start.elapsed() > timeout {
                return Err(ProcessError::ReadyTimeout {
                    name: self.name.clone(),
                    waited: start.elapsed(),
                });
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    /// Terminate the child and reap it. Dropping the guard without calling
    /// this still kills the child, but without reaping synchronously.
    pub async fn shutdown(mut self) -> Result<(), ProcessError> {
        if self.try_wait()?.is_none() {
            self.child
                .start_kill()
                .map_err(|source| ProcessError::Io {
                    name: self.name.clone(),
                    source,
                })?;
        }
        let status = self
            .child
            .wait()
            .await
            .map_err(|source| ProcessError::Io {
                name: self.name.clone(),
                source,
            })?;
        debug!("{} terminated with {}", self.name, status);
        Ok(())
    }

    fn try_wait(&mut self) -> Result<Option<std::process::ExitStatus>, ProcessError> {
        self.child.try_wait().map_err(|source| ProcessError::Io {
            name: self.name.clone(),
            source,
        })
    }
}
