//! The generation invoker.
//!
//! Each submission launches one external rendering process, passing the
//! submission serialized as the script's single JSON argument. Concurrent
//! submissions are admitted through a semaphore so the number of
//! simultaneously running render processes stays bounded; excess
//! submissions queue until a permit frees up.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::process::Command;
use tokio::sync::Semaphore;

use super::subprocess;

/// Configuration for the generation invoker.
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// Interpreter used to run the script (e.g. `python3`).
    pub python_bin: String,
    /// Path to the rendering script.
    pub script_path: String,
    /// Maximum wall-clock time before a render process is killed.
    pub timeout: Duration,
    /// Maximum number of render processes running at once.
    pub max_concurrent: usize,
}

/// Captured output from a completed render process.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    /// Everything the process wrote to stdout.
    pub stdout: String,
    /// Everything the process wrote to stderr.
    pub stderr: String,
    /// Exit code; `-1` when the process died to a signal.
    pub exit_code: i32,
    /// How long the process ran, in milliseconds.
    pub duration_ms: u64,
}

/// Errors that can occur while running the rendering script.
#[derive(Debug)]
pub enum GenerationError {
    /// The script file was not found at the configured path.
    NotFound(String),
    /// The process outlived the configured deadline and was killed.
    Timeout {
        /// Wall-clock time spent before the kill.
        elapsed_ms: u64,
    },
    /// The process ran to completion but reported a non-zero exit code.
    Failed {
        /// The reported exit code.
        exit_code: i32,
        /// stderr collected up to the exit.
        stderr: String,
    },
    /// Spawning or talking to the process failed.
    Io(std::io::Error),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Generation script not found: {path}"),
            Self::Timeout { elapsed_ms } => {
                write!(f, "Generation timed out after {elapsed_ms}ms")
            }
            Self::Failed { exit_code, stderr } => {
                write!(f, "Generation failed with exit code {exit_code}: {stderr}")
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs the external rendering script, one process per invocation.
pub struct Invoker {
    config: InvokerConfig,
    permits: Arc<Semaphore>,
}

impl Invoker {
    pub fn new(config: InvokerConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        Self { config, permits }
    }

    /// Run one render process for `submission`, waiting for a free permit
    /// first, and collect its output streams until it exits.
    ///
    /// The submission is serialized to JSON and passed as the script's sole
    /// argument. A non-zero exit code is uniformly a [`GenerationError::Failed`],
    /// regardless of which stream carries the diagnostic detail.
    pub async fn generate(
        &self,
        submission: &serde_json::Value,
    ) -> Result<GenerationOutput, GenerationError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::Io(std::io::Error::other("invoker shut down")))?;

        if tokio::fs::metadata(&self.config.script_path).await.is_err() {
            return Err(GenerationError::NotFound(self.config.script_path.clone()));
        }

        let payload = submission.to_string();

        let mut cmd = Command::new(&self.config.python_bin);
        cmd.arg(&self.config.script_path).arg(&payload);

        let output = subprocess::run_command(&mut cmd, self.config.timeout).await?;

        if output.exit_code != 0 {
            return Err(GenerationError::Failed {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// Write a shell script fixture and return an invoker targeting it.
    ///
    /// Using `/bin/sh` as the "interpreter" keeps the tests hermetic: the
    /// invoker only cares that it hands the serialized submission to a child
    /// process and collects the streams.
    fn sh_invoker(dir: &tempfile::TempDir, script: &str, timeout: Duration) -> Invoker {
        let path = dir.path().join("generate.sh");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(script.as_bytes()).unwrap();

        Invoker::new(InvokerConfig {
            python_bin: "/bin/sh".to_string(),
            script_path: path.to_string_lossy().into_owned(),
            timeout,
            max_concurrent: 2,
        })
    }

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = sh_invoker(&dir, "echo done", Duration::from_secs(5));

        let output = invoker
            .generate(&serde_json::json!({"name": "recursion"}))
            .await
            .unwrap();

        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout.trim(), "done");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn passes_submission_as_single_argument() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = sh_invoker(&dir, "echo \"$1\"", Duration::from_secs(5));

        let output = invoker
            .generate(&serde_json::json!({"name": "pythagorean theorem"}))
            .await
            .unwrap();

        let echoed: serde_json::Value = serde_json::from_str(output.stdout.trim()).unwrap();
        assert_eq!(echoed["name"], "pythagorean theorem");
    }

    #[tokio::test]
    async fn nonzero_exit_is_failed_with_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = sh_invoker(&dir, "echo boom >&2; exit 3", Duration::from_secs(5));

        let err = invoker
            .generate(&serde_json::json!({"name": "x"}))
            .await
            .unwrap_err();

        match err {
            GenerationError::Failed { exit_code, stderr } => {
                assert_eq!(exit_code, 3);
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hung_process_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = sh_invoker(&dir, "sleep 30", Duration::from_millis(200));

        let err = invoker
            .generate(&serde_json::json!({"name": "x"}))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Timeout { .. }));
    }

    #[tokio::test]
    async fn missing_script_is_not_found() {
        let invoker = Invoker::new(InvokerConfig {
            python_bin: "/bin/sh".to_string(),
            script_path: "/nonexistent/generate.sh".to_string(),
            timeout: Duration::from_secs(1),
            max_concurrent: 1,
        });

        let err = invoker
            .generate(&serde_json::json!({"name": "x"}))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::NotFound(_)));
    }

    #[test]
    fn display_failed() {
        let err = GenerationError::Failed {
            exit_code: 1,
            stderr: "traceback".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Generation failed with exit code 1: traceback"
        );
    }
}
