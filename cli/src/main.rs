//! timeline-launch - binary entry point.
//!
//! ```text
//! main() -> load config -> Launcher::run(SystemHost) -> LaunchAttempt
//!                                                          |
//!                              ok: exit 0 | failure: report, pause, exit 1
//! ```
//!
//! Takes no arguments. Console output is limited to what the Timeline Editor
//! itself prints plus one failure message; tracing stays off unless
//! `TIMELINE_LAUNCH_LOG` is set.

mod console;

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::{BufReader, stdin};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use timeline_launch_config::LaunchConfig;
use timeline_launch_core::{Launcher, SystemHost};

const LOG_ENV: &str = "TIMELINE_LAUNCH_LOG";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("off"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let ignored: Vec<String> = env::args().skip(1).collect();
    if !ignored.is_empty() {
        tracing::debug!(args = ?ignored, "Ignoring command-line arguments");
    }

    let config = match LaunchConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "{err}; using defaults");
            None
        }
    };
    let settings = timeline_launch_config::resolve(config.as_ref());

    let attempt = Launcher::new(settings.target).run(&SystemHost).await;

    if let Err(err) = attempt.outcome() {
        let pause = console::should_pause(settings.pause_on_error, io::stdin().is_terminal());
        let mut input = BufReader::new(stdin());
        console::report_failure(&mut io::stderr(), &mut input, err, pause)
            .await
            .context("failed to report launch failure")?;
    }

    Ok(ExitCode::from(attempt.process_exit_code()))
}
