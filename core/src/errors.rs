//! Launch failure taxonomy.
//!
//! Two fatal kinds only. A failing module is never classified further than
//! "exited unsuccessfully": missing dependencies, crashes, and usage errors
//! inside the module all look the same from here.

use thiserror::Error;

use crate::attempt::ChildExit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// No interpreter candidate could be resolved and queried.
    #[error(
        "Error: {runtime} is not installed or not in PATH.\n\
         Install {runtime} and make sure it is on your PATH, then run the launcher again."
    )]
    RuntimeMissing { runtime: String },

    /// The module could not be started or exited with a non-zero status.
    /// `exit` is `None` when spawning failed or the child died by signal.
    #[error(
        "Error: Failed to launch {module}.\n\
         Please install the dependencies with: {interpreter} -m pip install -r {manifest}"
    )]
    LaunchFailure {
        module: String,
        manifest: String,
        interpreter: String,
        exit: Option<ChildExit>,
    },
}

impl LaunchError {
    #[must_use]
    pub const fn is_runtime_missing(&self) -> bool {
        matches!(self, Self::RuntimeMissing { .. })
    }
}
