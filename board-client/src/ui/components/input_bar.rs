use eframe::egui;

/// Name and message inputs. Returns `(name, message)` when the user sends.
pub fn render(
    ui: &mut egui::Ui,
    name_text: &mut String,
    input_text: &mut String,
) -> Option<(String, String)> {
    let mut send = false;
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(egui::TextEdit::singleline(name_text).desired_width(120.0));
        ui.label("Message:");
        let response = ui.text_edit_singleline(input_text);
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && !input_text.is_empty() {
        let message = input_text.clone();
        input_text.clear();
        return Some((name_text.clone(), message));
    }

    None
}
