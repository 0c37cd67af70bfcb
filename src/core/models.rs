use std::path::{Path, PathBuf};

pub const WORKSPACE_PREFIX: &str = "Pentest-";

pub const DISCOVERY_FILE: &str = "initial_scan";
pub const ENRICHMENT_FILE: &str = "nmap_second_result.txt";
pub const REPORT_HTML_FILE: &str = "scan_result.html";
pub const REPORT_CSS_FILE: &str = "scan_result.css";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngagementDirs {
    pub root: PathBuf,    // <output>/Pentest-<name>
    pub scans: PathBuf,   // <root>/Results/Scan-Folder
}

impl EngagementDirs {
    pub fn new(output_dir: &Path, name: &str) -> Self {
        let root = output_dir.join(format!("{}{}", WORKSPACE_PREFIX, name));
        let scans = root.join("Results").join("Scan-Folder");
        Self { root, scans }
    }

    pub fn discovery_output(&self) -> PathBuf {
        self.scans.join(DISCOVERY_FILE)
    }

    pub fn enrichment_output(&self) -> PathBuf {
        self.scans.join(ENRICHMENT_FILE)
    }

    pub fn report_html(&self) -> PathBuf {
        self.scans.join(REPORT_HTML_FILE)
    }

    pub fn report_css(&self) -> PathBuf {
        self.scans.join(REPORT_CSS_FILE)
    }
}

#[derive(Clone, Debug)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub css: PathBuf,
}

#[derive(Clone, Debug)]
pub enum RunOutcome {
    NoOpenPorts,
    Reported { ports: String, report: ReportPaths },
}
