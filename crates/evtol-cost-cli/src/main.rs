use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use evtol_cost_cli::output::OutputFormat;

mod commands;

use commands::estimate::EstimateArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "eVTOL direct operating cost estimator")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the built-in illustrative scenario and print its cost per flight.
    Demo {
        /// Vehicle configuration for the demo scenario.
        #[arg(long, default_value = "tiltwing")]
        vehicle: String,
    },
    /// Evaluate a scenario from a JSON file and/or individual input flags.
    Estimate(EstimateArgs),
    /// Print the calibration constants and per-vehicle constant table.
    Constants,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Demo { vehicle } => commands::demo::handle_demo(vehicle, cli.format),
        Command::Estimate(args) => commands::estimate::handle_estimate(args, cli.format),
        Command::Constants => commands::constants::handle_constants(cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
