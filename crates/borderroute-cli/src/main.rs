use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use borderroute_cli::commands::{country::handle_country, load_graph, route::handle_route};
use borderroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest land routes between countries")]
struct Cli {
    /// Path to the countries JSON dataset. Falls back to BORDERROUTE_DATA_PATH.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest land route between two country codes.
    Route {
        /// Origin country code (cca3, any casing).
        origin: String,
        /// Destination country code (cca3, any casing).
        destination: String,
    },
    /// Show a country and the countries it borders.
    Country {
        /// Country code (cca3, any casing).
        code: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_graph(cli.data.as_deref())?;
    let rendered = match &cli.command {
        Command::Route {
            origin,
            destination,
        } => handle_route(&graph, origin, destination, cli.format)?,
        Command::Country { code } => handle_country(&graph, code, cli.format)?,
    };

    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
