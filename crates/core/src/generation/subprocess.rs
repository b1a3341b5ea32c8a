//! Process execution for the generation invoker: spawn, drain both output
//! streams, enforce the deadline.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::invoker::{GenerationError, GenerationOutput};

/// Per-stream capture cap (10 MiB); output past it is dropped, not buffered.
const STREAM_CAP: usize = 10 * 1024 * 1024;

/// Run `cmd` to completion under `timeout` and hand back both streams.
///
/// stdout and stderr are drained by independent spawned tasks, so neither
/// pipe can fill up and stall the child while the other side is being read.
/// The returned output carries the raw exit code; deciding that non-zero
/// means failure is the invoker's call.
pub(super) async fn run_command(
    cmd: &mut Command,
    timeout: Duration,
) -> Result<GenerationOutput, GenerationError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // Dropping the child (timeout path below) must also kill it.
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = cmd.spawn().map_err(GenerationError::Io)?;

    // Detach the pipe handles so `child.wait()` can borrow the child while
    // the readers run.
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();
    let stdout_task = tokio::spawn(async move { drain(stdout_pipe).await });
    let stderr_task = tokio::spawn(async move { drain(stderr_pipe).await });

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let stdout = stdout_task.await.unwrap_or_default();
            let stderr = stderr_task.await.unwrap_or_default();

            Ok(GenerationOutput {
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
                exit_code: status.code().unwrap_or(-1),
                duration_ms,
            })
        }
        Ok(Err(e)) => Err(GenerationError::Io(e)),
        Err(_elapsed) => Err(GenerationError::Timeout {
            elapsed_ms: start.elapsed().as_millis() as u64,
        }),
    }
}

/// Collect a pipe into memory, up to [`STREAM_CAP`] bytes.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut r) = pipe {
        let _ = (&mut r).take(STREAM_CAP as u64).read_to_end(&mut buf).await;
    }
    buf
}
