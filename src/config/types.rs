use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EsdrasConfig {
    pub scanner: ScannerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScannerConfig {
    pub command: String,
    /// Packets per second floor for the discovery pass (`--min-rate`).
    pub min_rate: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            command: "nmap".to_string(),
            min_rate: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub open_in_browser: bool,
    /// Program used instead of the platform's default opener.
    pub opener: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Esdras Report".to_string(),
            open_in_browser: true,
            opener: None,
        }
    }
}

impl EsdrasConfig {
    /// Command line flags win over file values.
    pub fn apply_cli(&mut self, cli: &crate::cli::args::Cli) {
        if let Some(scanner) = &cli.scanner {
            self.scanner.command = scanner.clone();
        }
        if let Some(min_rate) = cli.min_rate {
            self.scanner.min_rate = min_rate;
        }
        if cli.no_open {
            self.report.open_in_browser = false;
        }
    }
}
