//! coterm - Command-line interface for co-occurring term statistics.

use clap::Parser;
use coterm_cli::{commands, config, Cli, Command, Formatter};
use coterm_service::CoTermService;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> coterm_cli::Result<()> {
    let cli = Cli::parse();

    let service_config = config::service_config(&cli)?;
    tracing::debug!(
        "Sources: manual={}, all={}",
        service_config.loader.manual_source.display(),
        service_config.loader.all_source.display()
    );
    let format = cli.format.map(Into::into).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    let service = CoTermService::start(service_config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Top(args) => commands::execute_top(args, &service, &formatter, &mut stdout)?,
        Command::Summary => commands::execute_summary(&service, &formatter, &mut stdout)?,
    }

    Ok(())
}
