//! Multi-container demo dashboard entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stackdash::api::{create_router, AppState};
use stackdash::config::Config;
use stackdash::store::{CounterStore, RedisStore};
use stackdash::utils::shutdown_signal;

/// Multi-container demo dashboard.
#[derive(Parser, Debug)]
#[command(name = "stackdash")]
#[command(about = "Dashboard web service backed by an external counter store")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP listen port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dashboard HTTP server (default).
    Run {
        /// HTTP listen port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check connectivity to the counter store.
    CheckStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("stackdash=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::CheckStore) => cmd_check_store().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("STACKDASH - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Store: {}:{}", config.store_host, config.store_port);
    println!("  Counter Key: {}", config.counter_key);
    println!("  HTTP Port: {}", config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Check connectivity to the counter store.
async fn cmd_check_store() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("STACKDASH - STORE CONNECTIVITY CHECK");
    println!("======================================================================");

    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    println!("Store: {}:{}", config.store_host, config.store_port);

    print!("\n1. Creating store client... ");
    let store = RedisStore::new(&config)?;
    println!("OK");

    print!("\n2. Pinging store... ");
    match store.ping().await {
        Ok(true) => println!("OK (healthy)"),
        Ok(false) => println!("REACHABLE but reported unhealthy"),
        Err(e) => {
            println!("FAILED");
            println!("   Error: {}", e);
            return Err(anyhow::anyhow!("Store unreachable"));
        }
    }

    println!("\n======================================================================");
    println!("STORE CHECK COMPLETED");
    println!("======================================================================");

    Ok(())
}

/// Run the dashboard HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Store: {}:{}", config.store_host, config.store_port);
    info!("Counter key: {}", config.counter_key);

    // The one long-lived store client shared by every request.
    let store: Arc<dyn CounterStore> = Arc::new(RedisStore::new(&config)?);
    let config = Arc::new(config);

    let state = AppState::new(store, config.clone());
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
