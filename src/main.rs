use clap::{Parser, Subcommand};
use std::process::ExitCode;

use storekeep::commands::{cmd_analytics, cmd_home, cmd_inventory, cmd_orders, cmd_products};

#[derive(Parser)]
#[command(name = "storekeep")]
#[command(about = "Terminal admin dashboard for your shop")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, filter, and create orders
    #[command(visible_alias = "o")]
    Orders,

    /// Browse inventory items
    #[command(visible_alias = "i")]
    Inventory,

    /// Edit product titles and descriptions
    #[command(visible_alias = "p")]
    Products,

    /// Revenue over a date range
    #[command(visible_alias = "a")]
    Analytics,
}

fn main() -> ExitCode {
    // Logging goes to stderr only when RUST_LOG asks for it; the TUI owns
    // stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_home(),
        Some(Commands::Orders) => cmd_orders(),
        Some(Commands::Inventory) => cmd_inventory(),
        Some(Commands::Products) => cmd_products(),
        Some(Commands::Analytics) => cmd_analytics(),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
