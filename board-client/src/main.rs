mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use network::{ApiWorker, BoardApi};
use tokio::sync::mpsc;
use ui::BoardApp;

#[derive(Parser)]
#[command(
    name = "board-client",
    version,
    about = "Desktop client for the message board"
)]
struct Cli {
    /// API base URL; overrides SERVER_HOSTNAME
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let server = config::server_hostname(cli.server);

    // UI -> API worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // API worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let worker = ApiWorker::new(BoardApi::new(server.clone()), cmd_rx, event_tx);
    tokio::spawn(worker.run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Message Board",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("BoardApp should only be initialized once");

            log::info!("Client started against {server}");

            Ok(Box::new(BoardApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
