use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::GlobalOpts;

#[derive(Parser)]
#[command(name = "lithos", version, about = "Lithos stone recommendation CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend stones for a mood and profile
    Recommend(commands::recommend::RecommendArgs),
    /// Recommend stones from profile, current energy and needs
    Intelligent(commands::recommend::IntelligentArgs),
    /// Show the estimated energy state
    Energy(commands::energy::EnergyArgs),
    /// Parse profile text and show the structured profile
    Profile(commands::profile::ProfileArgs),
    /// Browse the stone catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LITHOS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args, &cli.global),
        Commands::Intelligent(args) => commands::recommend::run_intelligent(args, &cli.global),
        Commands::Energy(args) => commands::energy::run(args, &cli.global),
        Commands::Profile(args) => commands::profile::run(args, &cli.global),
        Commands::Catalog { action } => commands::catalog::run(action, &cli.global),
        Commands::Config { action } => commands::config::run(action, &cli.global),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
