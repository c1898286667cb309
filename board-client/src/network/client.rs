use tokio::sync::mpsc;

use super::http::BoardApi;
use crate::common::{ApiCommand, ApiEvent, NewMessage};

/// Background task that runs HTTP calls on behalf of the UI.
pub struct ApiWorker {
    api: BoardApi,
    command_receiver: mpsc::Receiver<ApiCommand>,
    event_sender: mpsc::Sender<ApiEvent>,
}

impl ApiWorker {
    pub fn new(
        api: BoardApi,
        command_receiver: mpsc::Receiver<ApiCommand>,
        event_sender: mpsc::Sender<ApiEvent>,
    ) -> Self {
        Self {
            api,
            command_receiver,
            event_sender,
        }
    }

    /// Runs until the UI drops its command sender or stops listening.
    pub async fn run(mut self) {
        log::info!("API worker started");

        while let Some(command) = self.command_receiver.recv().await {
            let event = self.handle_command(command).await;
            if self.event_sender.send(event).await.is_err() {
                log::warn!("UI event channel closed; stopping API worker");
                break;
            }
        }

        log::info!("API worker stopped");
    }

    async fn handle_command(&self, command: ApiCommand) -> ApiEvent {
        match command {
            ApiCommand::FetchAboutUs { ticket } => match self.api.fetch_about_us().await {
                Ok(content) => ApiEvent::AboutUsLoaded { ticket, content },
                Err(err) => ApiEvent::AboutUsFailed {
                    ticket,
                    reason: err.to_string(),
                },
            },
            ApiCommand::FetchMessages { ticket } => match self.api.fetch_messages().await {
                Ok(messages) => ApiEvent::MessagesLoaded { ticket, messages },
                Err(err) => ApiEvent::MessagesFailed {
                    ticket,
                    reason: err.to_string(),
                },
            },
            ApiCommand::SaveMessage { name, message } => {
                match self.api.save_message(&NewMessage { name, message }).await {
                    Ok(saved) => ApiEvent::MessageSaved(saved),
                    Err(err) => ApiEvent::SaveFailed(err.to_string()),
                }
            }
        }
    }
}
