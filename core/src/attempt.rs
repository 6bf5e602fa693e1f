use std::path::PathBuf;
use std::process::ExitStatus;

use crate::errors::LaunchError;

/// Platform-neutral summary of a child's exit status.
///
/// `code` is `None` when the child was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    code: Option<i32>,
}

impl ChildExit {
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    #[must_use]
    pub const fn signaled() -> Self {
        Self { code: None }
    }

    #[must_use]
    pub const fn code(self) -> Option<i32> {
        self.code
    }

    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Record of a single run. Created at the start of `Launcher::run`, dropped
/// when the process exits.
///
/// Success requires both a resolved interpreter and a zero child exit.
#[derive(Debug)]
pub struct LaunchAttempt {
    module: String,
    interpreter: Option<PathBuf>,
    exit: Option<ChildExit>,
    failure: Option<LaunchError>,
}

impl LaunchAttempt {
    pub(crate) fn runtime_missing(module: String, error: LaunchError) -> Self {
        Self {
            module,
            interpreter: None,
            exit: None,
            failure: Some(error),
        }
    }

    pub(crate) fn launched(
        module: String,
        interpreter: PathBuf,
        exit: Option<ChildExit>,
        failure: Option<LaunchError>,
    ) -> Self {
        Self {
            module,
            interpreter: Some(interpreter),
            exit,
            failure,
        }
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn runtime_available(&self) -> bool {
        self.interpreter.is_some()
    }

    /// Child exit code. `None` if the module never ran or died by signal.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.exit.and_then(ChildExit::code)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.runtime_available() && self.exit.is_some_and(ChildExit::success)
    }

    pub fn outcome(&self) -> Result<(), &LaunchError> {
        match &self.failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Status code for the launcher process itself: 0 or 1.
    #[must_use]
    pub fn process_exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }
}
