use crate::{
    cli::args::Cli,
    config::{ConfigLoader, EsdrasConfig},
    core::{
        models::{EngagementDirs, RunOutcome},
        state::{RunState, Stage},
    },
    executors::toolchain,
    organizers::layout,
    parser::extractor,
    plugins::nmap::{self, NmapScanner},
    reporters::{browser, html},
    ui::{banner, printer, progress::ScanSpinner},
    utils::logging,
};
use anyhow::Result;
use tracing::Instrument;

pub async fn run(cli: Cli) -> Result<RunOutcome> {
    logging::init(cli.verbosity())?;

    let span = tracing::info_span!("engagement", name = %cli.name, target = %cli.target);
    run_engagement(cli).instrument(span).await
}

async fn run_engagement(cli: Cli) -> Result<RunOutcome> {
    let mut config = ConfigLoader::load_with_custom_path(cli.config.as_deref())?;
    config.apply_cli(&cli);
    ConfigLoader::validate_config(&config)?;

    banner::print_banner();

    tracing::info!("Starting engagement '{}' against {}", cli.name, cli.target);
    let mut state = RunState::new(&cli.name, &cli.target);

    state.advance(Stage::Scaffold);
    let dirs = layout::prepare_engagement(&cli.output_dir, &state.name)?;

    let outcome = scan_and_report(&mut state, &dirs, &config).await?;

    state.advance(Stage::Done);
    printer::print_summary(&dirs.root);
    Ok(outcome)
}

async fn scan_and_report(
    state: &mut RunState,
    dirs: &EngagementDirs,
    config: &EsdrasConfig,
) -> Result<RunOutcome> {
    toolchain::check_scanner(&config.scanner.command);
    let scanner = NmapScanner::new(config.scanner.command.clone(), config.scanner.min_rate);

    state.advance(Stage::DiscoveryScan);
    printer::print_step("Starting initial Nmap scan...");
    let spinner = ScanSpinner::start(&format!("Scanning all ports on {}", state.target));
    let discovery = scanner.run_discovery(&state.target, dirs).await;
    spinner.finish();
    discovery?;
    printer::print_success("Initial Nmap scan completed.");

    state.advance(Stage::Extract);
    let greppable = nmap::read_discovery_output(&dirs.discovery_output())?;
    let ports = extractor::extract_open_ports(&greppable);
    tracing::info!(
        "Extracted {} open port(s): {:?}",
        extractor::open_port_count(&ports),
        ports
    );

    state.advance(Stage::Decision);
    if ports.is_empty() {
        printer::print_no_open_ports();
        return Ok(RunOutcome::NoOpenPorts);
    }

    state.advance(Stage::EnrichmentScan);
    printer::print_step("Starting second Nmap scan...");
    let spinner = ScanSpinner::start(&format!("Probing services on ports {}", ports));
    let enrichment = scanner.run_enrichment(&state.target, &ports, dirs).await;
    spinner.finish();
    enrichment?;
    printer::print_success("Second Nmap scan completed.");

    state.advance(Stage::ReportEmit);
    let scan_text = nmap::read_enrichment_output(&dirs.enrichment_output())?;
    let report = html::write_report(dirs, &config.report.title, &scan_text)?;

    if config.report.open_in_browser {
        printer::print_step("Displaying the result in the browser...");
        browser::open_report(&report.html, config.report.opener.as_deref());
    }

    printer::print_ports_done(&ports);
    Ok(RunOutcome::Reported { ports, report })
}
