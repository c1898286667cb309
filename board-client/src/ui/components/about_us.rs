use eframe::egui;

use crate::ui::state::{AboutUsState, AboutUsView};

/// What the "About Us" view shows, top to bottom.
#[derive(Debug, PartialEq, Eq)]
pub enum Block<'a> {
    Spinner,
    Error(&'a str),
    Heading(&'a str),
    Paragraph(&'a str),
    Image(&'a str),
}

/// Content splits on line breaks, one paragraph per line.
pub fn blocks(view: &AboutUsView) -> Vec<Block<'_>> {
    match &view.state {
        AboutUsState::Loading => vec![Block::Spinner],
        AboutUsState::Failed(message) => vec![Block::Error(message)],
        AboutUsState::Loaded(about) => {
            let mut blocks = vec![Block::Heading(&about.title)];
            blocks.extend(about.content.split('\n').map(Block::Paragraph));
            blocks.push(Block::Image(&about.image_url));
            blocks
        }
    }
}

pub fn render(ui: &mut egui::Ui, view: &AboutUsView) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        for block in blocks(view) {
            match block {
                Block::Spinner => {
                    ui.spinner();
                }
                Block::Error(message) => {
                    ui.colored_label(egui::Color32::RED, message);
                }
                Block::Heading(title) => {
                    ui.heading(title);
                }
                Block::Paragraph(text) => {
                    ui.label(text);
                    ui.add_space(6.0);
                }
                Block::Image(url) => {
                    let max_width = ui.available_width();
                    ui.add(egui::Image::from_uri(url).max_width(max_width));
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::AboutUsContent;

    fn view(state: AboutUsState) -> AboutUsView {
        AboutUsView { ticket: 1, state }
    }

    #[test]
    fn loaded_view_renders_paragraphs_then_image() {
        let view = view(AboutUsState::Loaded(AboutUsContent {
            title: "About Us".to_string(),
            content: "first\n\nsecond".to_string(),
            image_url: "https://example.com/me.jpg".to_string(),
        }));

        assert_eq!(
            blocks(&view),
            vec![
                Block::Heading("About Us"),
                Block::Paragraph("first"),
                Block::Paragraph(""),
                Block::Paragraph("second"),
                Block::Image("https://example.com/me.jpg"),
            ]
        );
    }

    #[test]
    fn failed_view_renders_only_the_error() {
        let view = view(AboutUsState::Failed("Failed to fetch About Us data".to_string()));
        assert_eq!(blocks(&view), vec![Block::Error("Failed to fetch About Us data")]);
    }

    #[test]
    fn loading_view_renders_spinner() {
        assert_eq!(blocks(&view(AboutUsState::Loading)), vec![Block::Spinner]);
    }
}
