use crate::ui::state::Page;
use eframe::egui;

/// Page navigation. Returns the page the user picked this frame, if any.
pub fn render(ui: &mut egui::Ui, current: Page) -> Option<Page> {
    let mut picked = None;

    ui.heading("Board");
    ui.separator();

    for (page, label) in [(Page::Messages, "Messages"), (Page::AboutUs, "About Us")] {
        if ui.selectable_label(current == page, label).clicked() {
            picked = Some(page);
        }
    }

    picked
}
