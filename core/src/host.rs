//! Boundary: interpreter probing and child process execution.
//!
//! Everything that touches `PATH` or spawns a process lives behind [`Host`].

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tokio::signal;

use crate::attempt::ChildExit;

pub trait Host {
    /// Resolve `interpreter` and confirm it answers a version query.
    ///
    /// Returns the resolved executable path, or `None` if the interpreter is
    /// missing or the query fails. Must not write to the console.
    fn probe(&self, interpreter: &str) -> impl Future<Output = Option<PathBuf>>;

    /// Run `program args..` sharing the console and wait for it to exit.
    ///
    /// Ctrl-C goes to the child through the shared console; the launcher
    /// keeps waiting so the outcome always reflects the child's exit.
    fn launch(
        &self,
        program: &Path,
        args: &[String],
    ) -> impl Future<Output = io::Result<ChildExit>>;
}

/// The real host: `which` resolution and tokio child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    async fn probe(&self, interpreter: &str) -> Option<PathBuf> {
        let resolved = match which::which(interpreter) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(interpreter, error = %err, "Interpreter not found in PATH");
                return None;
            }
        };

        let status = Command::new(&resolved)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => {
                tracing::debug!(path = %resolved.display(), "Interpreter available");
                Some(resolved)
            }
            Ok(status) => {
                tracing::debug!(
                    path = %resolved.display(),
                    code = ?status.code(),
                    "Interpreter version query failed"
                );
                None
            }
            Err(err) => {
                tracing::debug!(
                    path = %resolved.display(),
                    error = %err,
                    "Interpreter could not be executed"
                );
                None
            }
        }
    }

    async fn launch(&self, program: &Path, args: &[String]) -> io::Result<ChildExit> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        loop {
            tokio::select! {
                status = child.wait() => return Ok(ChildExit::from(status?)),
                interrupt = signal::ctrl_c() => match interrupt {
                    Ok(()) => tracing::debug!("Interrupt received; waiting for module to exit"),
                    Err(err) => {
                        tracing::debug!(error = %err, "Interrupt handler unavailable");
                        return Ok(ChildExit::from(child.wait().await?));
                    }
                },
            }
        }
    }
}
