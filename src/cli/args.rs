use crate::utils::logging::Verbosity;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "esdras", version)]
#[command(about = "Scaffold a pentest engagement workspace and run a two-stage nmap scan")]
pub struct Cli {
    /// Engagement name; the workspace is created as Pentest-<NAME>
    pub name: String,

    /// Target address handed to the scanner as-is
    pub target: String,

    /// Directory in which the workspace is created
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scanner executable (default: nmap)
    #[arg(long = "scanner", value_name = "PATH")]
    pub scanner: Option<String>,

    /// Minimum packet rate for the discovery pass
    #[arg(long = "min-rate", value_name = "N")]
    pub min_rate: Option<u32>,

    /// Do not open the HTML report in a browser
    #[arg(long = "no-open", action = ArgAction::SetTrue)]
    pub no_open: bool,

    /// Verbose human output
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logs (implies verbose)
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }
}
