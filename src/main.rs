//! FoodieMatch API server
//!
//! ```sh
//! # Run with default config (~/.config/foodie-match/config.toml)
//! foodie-match
//!
//! # Custom config path and port
//! foodie-match --config /etc/foodie-match/config.toml --port 8080
//!
//! # Validate config without starting
//! foodie-match --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use foodie_match::config::{default_config_path, AppConfig};
use foodie_match::server::{init_tracing, ServerHandle, ServerOptions};

/// Restaurant discovery CRUD API.
#[derive(Parser, Debug)]
#[command(
    name = "foodie-match",
    version,
    about = "Restaurant discovery CRUD API",
    long_about = "FoodieMatch REST API over categories, restaurants, products and users.\n\n\
                  Default config: ~/.config/foodie-match/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FOODIE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);

    if cli.check {
        let mut config = loaded?;
        apply_overrides(&mut config, &cli);
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Status codes: {:?}", config.api.status_codes);
        return Ok(());
    }

    let (mut config, load_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    apply_overrides(&mut config, &cli);
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
}
