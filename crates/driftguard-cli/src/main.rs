//! driftguard: File integrity checker

use clap::Parser;
use driftguard_cli::commands;
use driftguard_cli::logging::setup_logging;
use driftguard_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.audit_config();
    if cli.create {
        commands::create::run(&config)?;
    } else {
        commands::verify::run(&config, cli.format.into())?;
    }

    Ok(())
}
