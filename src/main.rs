use clap::Parser;
use dotenvy::dotenv;
use message_board::storage::{self, MessageStore};
use message_board::{AppState, ServerConfig, build_router};
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Parser)]
#[command(
    name = "message_board",
    version,
    about = "Message board REST API"
)]
struct Cli {
    /// Store connection string (file path or `:memory:`); overrides DB_CONNECTION_STRING
    #[arg(long, value_name = "CONN")]
    db: Option<String>,
    /// Interface to bind; overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on; overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env();
    if let Some(db) = cli.db {
        config.db_connection_string = db;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    storage::ensure_data_dir(&config.db_connection_string)?;
    let store = match MessageStore::open(&config.db_connection_string) {
        Ok(store) => {
            log::info!("Connected to message store at {}", config.db_connection_string);
            store
        }
        Err(err) => {
            log::error!("Failed to connect to message store: {err}");
            return Err(err.into());
        }
    };

    let app = build_router(AppState::new(store, config.log_requests));
    let listener = TcpListener::bind(config.bind_addr()?).await?;
    log::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                log::info!("Received shutdown signal, stopping server...");
            }
        })
        .await?;

    Ok(())
}
