use bybit_relay::cli::{Cli, Commands};
use bybit_relay::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        // Return a default config for now
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    bybit_relay::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting webhook server");
            args.execute(&config).await?;
        }
        Commands::Status => {
            println!("bybit-relay status");
            println!("  Exchange: {}", config.exchange.base_url);
            println!("  Status: Not running");
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Bind: {}", config.server.bind_addr);
            println!("  Exchange: {}", config.exchange.base_url);
            println!("  Quote currency: {}", config.exchange.quote_currency);
            println!("  Timeout: {}s", config.exchange.timeout_secs);
            match config.sizing.qty_step {
                Some(step) => println!("  Qty step: {}", step),
                None => println!("  Qty step: none"),
            }
        }
    }

    Ok(())
}
