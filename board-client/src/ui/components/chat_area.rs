use eframe::egui;

use crate::common::MessageDocument;

pub fn render(ui: &mut egui::Ui, messages: &[MessageDocument]) {
    // leave room for the input bar below
    let max_height = (ui.available_height() - 40.0).max(0.0);
    egui::ScrollArea::vertical()
        .max_height(max_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.label(egui::RichText::new("No messages yet").weak());
            }
            for message in messages {
                ui.horizontal(|ui| {
                    let time = message.created_at.format("%H:%M:%S");
                    ui.label(egui::RichText::new(format!("[{time}]")).weak());
                    ui.strong(message.name.as_deref().unwrap_or("anonymous"));
                    ui.label(message.message.as_deref().unwrap_or(""));
                });
            }
        });
}
