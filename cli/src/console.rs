//! Failure reporting and the acknowledgment pause.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use timeline_launch_core::LaunchError;

pub const ACKNOWLEDGE_PROMPT: &str = "Press Enter to exit...";

/// Pause only when enabled and someone is there to press Enter.
pub fn should_pause(pause_on_error: bool, interactive: bool) -> bool {
    pause_on_error && interactive
}

/// Print `err` and, if `pause`, block until a line (or EOF) arrives on `input`.
pub async fn report_failure<W, R>(
    out: &mut W,
    input: &mut R,
    err: &LaunchError,
    pause: bool,
) -> io::Result<()>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    writeln!(out, "{err}")?;
    out.flush()?;

    if pause {
        write!(out, "{ACKNOWLEDGE_PROMPT}")?;
        out.flush()?;
        let mut line = String::new();
        if let Err(err) = input.read_line(&mut line).await {
            tracing::debug!(error = %err, "Acknowledgment read failed");
        }
    }

    Ok(())
}
