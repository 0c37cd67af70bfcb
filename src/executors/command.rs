use crate::core::errors::{EsdrasError, ExecError};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Where a child's stdout and stderr go.
#[derive(Debug, Clone)]
pub enum OutputSink {
    /// Both streams to the null device.
    Discard,
    /// Both streams interleaved into one file, truncated first.
    File(PathBuf),
}

/// Result of a finished child. Exit status is reported, not judged.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub duration_ms: u128,
}

pub async fn execute<S: AsRef<OsStr>>(
    tool: &str,
    args: &[S],
    sink: &OutputSink,
) -> Result<CommandOutcome> {
    let start = Instant::now();

    tracing::debug!("Executing: {} {}", tool, display_args(args).join(" "));

    let mut cmd = Command::new(tool);
    cmd.args(args).stdin(Stdio::null());

    match sink {
        OutputSink::Discard => {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        OutputSink::File(path) => {
            let (stdout, stderr) = shared_output(path)?;
            cmd.stdout(stdout).stderr(stderr);
        }
    }

    let mut child = cmd.spawn().map_err(|e| {
        EsdrasError::Exec(ExecError {
            tool: tool.to_string(),
            args: display_args(args),
            reason: e.to_string(),
        })
    })?;

    // No timeout: a hung scanner hangs the run.
    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed waiting for {}", tool))?;

    let outcome = CommandOutcome {
        exit_code: status.code(),
        success: status.success(),
        duration_ms: start.elapsed().as_millis(),
    };

    tracing::debug!(
        "{} exited with {:?} after {}ms",
        tool,
        outcome.exit_code,
        outcome.duration_ms
    );

    Ok(outcome)
}

fn display_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<String> {
    args.iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect()
}

fn shared_output(path: &Path) -> Result<(Stdio, Stdio)> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let dup = file
        .try_clone()
        .with_context(|| format!("Failed to duplicate handle for {:?}", path))?;
    Ok((Stdio::from(file), Stdio::from(dup)))
}
