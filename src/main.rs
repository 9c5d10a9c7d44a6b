use std::path::Path;

use clap::Parser;
use roster_report::utils::{logger, validation::Validate};
use roster_report::{loader, report, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let people = match loader::load_from_path(Path::new(&config.input)) {
        Ok(people) => people,
        Err(e) => {
            tracing::error!("Load failed: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("Loaded {} employee record(s)", people.len());

    report::print_report(&people)?;

    Ok(())
}
