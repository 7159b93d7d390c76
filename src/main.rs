mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use budgeter::settings::load_settings;
use cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Convert {
            file,
            format,
            output,
        } => cli::convert::run(&file, format.as_deref(), output.as_deref()),
        Commands::Preview {
            file,
            format,
            limit,
        } => cli::preview::run(&file, format.as_deref(), limit),
        Commands::Formats => cli::formats::list(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set { key, value } => cli::config::set(&key, &value),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// `BUDGETER_LOG` wins over the `log_level` setting.
fn init_logging() {
    let filter = EnvFilter::try_from_env("BUDGETER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(load_settings().log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
