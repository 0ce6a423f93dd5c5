use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use accommodations::{AccommodationsConfig, AccommodationsModule};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use runtime::{AppConfig, CliArgs};

mod db;
mod http;

/// Jagoga Server - lodging listings backend
#[derive(Parser)]
#[command(name = "jagoga-server")]
#[command(about = "Jagoga Server - lodging listings backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config/app
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (port / verbosity / mock database)
    config.apply_cli_overrides(&args);

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Initialize logging
    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Jagoga Server starting");

    // Execute command
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");

    let db_config = config
        .database
        .clone()
        .ok_or_else(|| anyhow!("Database configuration is required"))?;
    let base_dir = PathBuf::from(&config.server.home_dir);
    let conn = db::connect(&db_config, &base_dir).await?;

    let module_config: AccommodationsConfig = config.module_config("accommodations")?;
    let module = AccommodationsModule::new(conn, module_config);
    module.migrate().await?;
    module.init().await?;

    let timeout = match config.server.timeout_sec {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let router = http::build_router(module.router(), timeout)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| {
            anyhow!(
                "Invalid bind address '{}:{}': {}",
                config.server.host,
                config.server.port,
                e
            )
        })?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                tracing::warn!("shutdown: signal waiter failed ({e}); falling back to ctrl_c()");
                let _ = tokio::signal::ctrl_c().await;
            }
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow!(e))
}

async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?; // Ctrl+C
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    if let Some(db_config) = &config.database {
        let backend = db::detect_from_dsn(db_config)?;
        tracing::info!("Database backend: {:?}", backend);
    }
    config.module_config::<AccommodationsConfig>("accommodations")?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
