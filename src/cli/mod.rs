pub mod args;

use clap::error::ErrorKind;
use clap::Parser;

/// Parse the command line. Help and version exit 0; every other parse failure
/// prints clap's message with its usage line and exits 1.
pub fn parse_or_exit() -> args::Cli {
    match args::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}
