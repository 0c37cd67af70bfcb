use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How much of the run ends up on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings only: non-zero scanner exits, missing tools, browser failures.
    Quiet,
    /// Stage progress, plus the exact scanner command lines and exit statuses.
    Verbose,
    /// Everything, including file writes.
    Debug,
}

/// Filter directives for a verbosity. At `Verbose` the scanner plumbing
/// (`plugins`, `executors`) is raised to debug so command lines are visible
/// without flooding the rest of the run.
pub fn directives(verbosity: Verbosity) -> Vec<&'static str> {
    match verbosity {
        Verbosity::Quiet => vec!["warn", "esdras=warn"],
        Verbosity::Verbose => vec![
            "warn",
            "esdras=info",
            "esdras::plugins=debug",
            "esdras::executors=debug",
        ],
        Verbosity::Debug => vec!["info", "esdras=debug"],
    }
}

/// RUST_LOG is read first; the directives above are appended and win for
/// the targets they name.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let mut filter = EnvFilter::from_default_env();
    for directive in directives(verbosity) {
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("invalid log directive: {}", directive))?,
        );
    }

    // Stage transitions carry the engagement span, so targets add nothing.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(verbosity == Verbosity::Debug),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
