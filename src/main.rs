use clap::{Parser, Subcommand};
use database::BookRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use web_server::AppState;

/// A small REST API over the books catalog.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations and start the HTTP server.
    Serve,
    /// Apply pending database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = configuration::load_settings()?;

    // Initialize the database connection and run migrations
    let db_pool = database::connect(
        settings.database.max_connections,
        Duration::from_secs(settings.database.acquire_timeout_secs),
    )
    .await?;
    database::run_migrations(&db_pool).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => {
            tracing::info!("Migrations applied, exiting.");
        }
        Commands::Serve => {
            let repository = BookRepository::new(db_pool);
            let state = Arc::new(AppState::new(
                Arc::new(repository),
                settings.auth.jwt_secret.as_bytes(),
            ));
            let addr = settings.server.socket_addr()?;
            web_server::run_server(addr, state).await?;
        }
    }

    Ok(())
}
