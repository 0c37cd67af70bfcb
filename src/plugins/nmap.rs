use crate::core::models::EngagementDirs;
use crate::executors::command::{execute, CommandOutcome, OutputSink};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::Path;

/// Two-pass nmap driver: cheap all-port discovery, then service/version
/// probes restricted to what discovery found.
#[derive(Clone, Debug)]
pub struct NmapScanner {
    pub command: String,
    pub min_rate: u32,
}

impl NmapScanner {
    pub fn new(command: impl Into<String>, min_rate: u32) -> Self {
        Self {
            command: command.into(),
            min_rate,
        }
    }

    pub async fn run_discovery(&self, target: &str, dirs: &EngagementDirs) -> Result<CommandOutcome> {
        let output = dirs.discovery_output();
        let args = discovery_args(target, self.min_rate, &output);

        let outcome = execute(&self.command, &args, &OutputSink::Discard).await?;
        log_outcome("discovery", &outcome);
        Ok(outcome)
    }

    pub async fn run_enrichment(
        &self,
        target: &str,
        ports: &str,
        dirs: &EngagementDirs,
    ) -> Result<CommandOutcome> {
        let args = enrichment_args(ports, target);
        let sink = OutputSink::File(dirs.enrichment_output());

        let outcome = execute(&self.command, &args, &sink).await?;
        log_outcome("enrichment", &outcome);
        Ok(outcome)
    }
}

/// The `-oG` path is passed through as raw OS bytes so nmap writes exactly
/// the file `read_discovery_output` later opens.
pub fn discovery_args(target: &str, min_rate: u32, output: &Path) -> Vec<OsString> {
    vec![
        "-p-".into(),
        "--open".into(),
        format!("--min-rate={}", min_rate).into(),
        "-oG".into(),
        output.as_os_str().to_os_string(),
        target.into(),
        "-Pn".into(),
        "-n".into(),
    ]
}

pub fn enrichment_args(ports: &str, target: &str) -> Vec<OsString> {
    vec![
        "-sC".into(),
        "-sV".into(),
        format!("-p{}", ports).into(),
        target.into(),
        "-Pn".into(),
    ]
}

/// Greppable output of the discovery pass. A file the scanner never wrote
/// reads as empty, which downstream treats as "nothing open".
pub fn read_discovery_output(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::warn!("Discovery output {:?} was not produced", path);
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read scan output: {:?}", path))
}

/// Text of the enrichment pass. Service banners are not guaranteed to be
/// UTF-8; invalid bytes become U+FFFD so the report is still written.
pub fn read_enrichment_output(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read scan output: {:?}", path))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("Scan output {:?} is not valid UTF-8; replacing invalid bytes", path);
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn log_outcome(pass: &str, outcome: &CommandOutcome) {
    // Exit status does not change control flow; it only shows up in the log.
    if outcome.success {
        tracing::info!("nmap {} pass finished in {}ms", pass, outcome.duration_ms);
    } else {
        tracing::warn!(
            "nmap {} pass exited with {:?}; continuing with whatever output it left",
            pass,
            outcome.exit_code
        );
    }
}
