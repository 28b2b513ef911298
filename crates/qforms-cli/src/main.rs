//! qforms CLI - Quotative and copula extraction from speech transcripts.

use clap::Parser;
use qforms_cli::commands;
use qforms_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> qforms_cli::Result<()> {
    // Load config, then let flags override it
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    config.validate()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Extract) => {
            commands::execute_extract(&config, &formatter)?;
        }
        Some(Command::Patterns) => {
            commands::execute_patterns(&config, &formatter)?;
        }
        Some(Command::Scan(args)) => {
            commands::execute_scan(args, &config, &formatter)?;
        }
    }

    Ok(())
}
