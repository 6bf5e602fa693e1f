use std::path::PathBuf;

use crate::attempt::LaunchAttempt;
use crate::errors::LaunchError;
use crate::host::Host;
use crate::target::LaunchTarget;

/// Sequences the interpreter probe and the module launch.
///
/// `run` consumes the launcher: one invocation, one attempt.
#[derive(Debug, Clone)]
pub struct Launcher {
    target: LaunchTarget,
}

impl Launcher {
    #[must_use]
    pub fn new(target: LaunchTarget) -> Self {
        Self { target }
    }

    pub async fn run<H: Host>(self, host: &H) -> LaunchAttempt {
        let Self { target } = self;
        let module = target.module().to_string();

        let Some((interpreter, resolved)) = probe_candidates(&target, host).await else {
            tracing::warn!(
                runtime = target.runtime_name(),
                tried = ?target.interpreters(),
                "No usable interpreter found"
            );
            let error = LaunchError::RuntimeMissing {
                runtime: target.runtime_name().to_string(),
            };
            return LaunchAttempt::runtime_missing(module, error);
        };

        tracing::info!(
            interpreter = %resolved.display(),
            module = %module,
            "Launching module"
        );

        let exit = match host.launch(&resolved, &target.module_args()).await {
            Ok(exit) => Some(exit),
            Err(err) => {
                tracing::error!(
                    interpreter = %resolved.display(),
                    error = %err,
                    "Failed to spawn module"
                );
                None
            }
        };

        let failure = match exit {
            Some(exit) if exit.success() => {
                tracing::info!("Module exited cleanly");
                None
            }
            _ => {
                tracing::warn!(code = ?exit.and_then(|e| e.code()), "Module exited unsuccessfully");
                Some(LaunchError::LaunchFailure {
                    module: module.clone(),
                    manifest: target.manifest().to_string(),
                    interpreter,
                    exit,
                })
            }
        };

        LaunchAttempt::launched(module, resolved, exit, failure)
    }
}

/// First candidate that the host can resolve and query, paired with its
/// resolved path.
async fn probe_candidates<H: Host>(
    target: &LaunchTarget,
    host: &H,
) -> Option<(String, PathBuf)> {
    for candidate in target.interpreters() {
        if let Some(resolved) = host.probe(candidate).await {
            return Some((candidate.clone(), resolved));
        }
    }
    None
}
