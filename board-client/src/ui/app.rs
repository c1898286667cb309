use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::components::{about_us, chat_area, input_bar, sidebar};
use super::state::{AppState, Page};

pub struct BoardApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl BoardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        };
        app.navigate(Page::Messages);
        app
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ApiEvent::AboutUsLoaded { ticket, content } => {
                    self.state.about_us_loaded(ticket, content);
                }
                ApiEvent::AboutUsFailed { ticket, reason } => {
                    self.state.about_us_failed(ticket, &reason);
                }
                ApiEvent::MessagesLoaded { ticket, messages } => {
                    self.state.messages_loaded(ticket, messages);
                }
                ApiEvent::MessagesFailed { ticket, reason } => {
                    self.state.messages_failed(ticket, &reason);
                }
                ApiEvent::MessageSaved(message) => self.state.push_message(message),
                ApiEvent::SaveFailed(reason) => self.state.save_failed(&reason),
            }
        }
    }

    /// Mounting a page issues its one fetch.
    fn navigate(&mut self, page: Page) {
        let Some(ticket) = self.state.navigate(page) else {
            return;
        };
        let command = match page {
            Page::Messages => ApiCommand::FetchMessages { ticket },
            Page::AboutUs => ApiCommand::FetchAboutUs { ticket },
        };
        self.send_command(command);
    }

    fn send_command(&mut self, command: ApiCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        let mut picked = None;
        egui::SidePanel::left("nav_sidebar")
            .resizable(false)
            .default_width(140.0)
            .show(ctx, |ui| {
                picked = sidebar::render(ui, self.state.page);
            });
        if let Some(page) = picked {
            self.navigate(page);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::AboutUs => {
                if let Some(view) = &self.state.about_us {
                    about_us::render(ui, view);
                }
            }
            Page::Messages => {
                ui.heading("Message Board");
                ui.separator();

                if let Some(view) = &self.state.messages {
                    if view.loading {
                        ui.spinner();
                    }
                    if let Some(error) = &view.error {
                        ui.colored_label(egui::Color32::RED, error);
                    }
                    chat_area::render(ui, &view.messages);
                }

                ui.separator();
                if let Some((name, message)) =
                    input_bar::render(ui, &mut self.state.name_input, &mut self.state.input_text)
                {
                    self.send_command(ApiCommand::SaveMessage { name, message });
                }
            }
        });

        ctx.request_repaint();
    }
}
