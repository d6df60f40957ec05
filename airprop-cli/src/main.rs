//! airprop CLI - run, initialize, and smoke-test the AirProp API
//!
//! Subcommands:
//! - `serve`: run the HTTP server against a SQLite database
//! - `init-db`: create the schema and insert sample records
//! - `smoke`: exercise a running server end to end

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use airprop_server::db::{create_pool, migrations};
use airprop_server::{run_server, ServerConfig};

mod seed;
mod smoke;
mod tracing_setup;

const DEFAULT_DATABASE_URL: &str = "sqlite:airprop.db?mode=rwc";

#[derive(Parser, Debug)]
#[command(
    name = "airprop",
    author,
    version,
    about = "Property-management record keeper with an HTTP/JSON API"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Create the schema and insert sample properties and tenants
    InitDb(InitDbArgs),
    /// Exercise a running server end to end
    Smoke(smoke::SmokeArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

#[derive(Parser, Debug)]
struct InitDbArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::InitDb(args) => run_init_db(args).await,
        Commands::Smoke(args) => smoke::run_smoke(args).await,
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting airprop server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to set up schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")
}

async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to set up schema")?;

    seed::insert_sample_data(&pool)
        .await
        .context("Failed to insert sample data")?;

    println!("Database initialization completed");
    Ok(())
}
