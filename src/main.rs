//! Main entry point for the apk-checksum CLI application.
//!
//! Prints the 256-byte checksum of the APK named on the command line.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

use apk_checksum::cli::MISSING_APK;
use apk_checksum::error::EXIT_USAGE;
use apk_checksum::{ChecksumError, Cli, checksum_file, logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Best effort: the process exits with the usage status either way.
            e.print().ok();
            eprintln!("\nError: {MISSING_APK}");
            std::process::exit(EXIT_USAGE);
        }
    };

    logging::init_logging(cli.debug);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<ChecksumError>()
            .map(ChecksumError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

/// Compute the checksum and print it only once the whole walk succeeded.
fn run(cli: &Cli) -> Result<()> {
    let checksum = checksum_file(&cli.apk)?;
    print!("{checksum}");
    Ok(())
}
