//! Wordbank Import - word-game dictionary builder
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordbank_import::cli::Args;
use wordbank_import::processor::{ImportConfig, Importer};
use wordbank_import::progress::print_error;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ImportConfig::from_args(&args);
    log::debug!("Import configuration: {:?}", config);

    let mut importer = Importer::new(config);
    importer.run()?;

    Ok(())
}
