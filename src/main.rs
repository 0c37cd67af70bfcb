mod app;
mod cli;
mod config;
mod core;
mod executors;
mod organizers;
mod parser;
mod plugins;
mod reporters;
mod ui;
mod utils;

use crate::core::models::RunOutcome;
use human_panic::setup_panic;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_panic!();

    let cli = cli::parse_or_exit();
    match app::run(cli).await {
        Ok(RunOutcome::NoOpenPorts) => tracing::debug!("run finished without open ports"),
        Ok(RunOutcome::Reported { ports, report }) => {
            tracing::debug!("run finished: ports {} reported in {:?}", ports, report.html)
        }
        Err(err) => {
            eprintln!("fatal: {:#}", err);
            std::process::exit(1);
        }
    }
}
