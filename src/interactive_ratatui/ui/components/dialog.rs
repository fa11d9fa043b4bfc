use crate::interactive_ratatui::constants::{ACK_DIALOG_HEIGHT, ACK_DIALOG_WIDTH};
use crate::interactive_ratatui::ui::components::{Component, view_layout::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Modal notice with a single OK button. Nothing else takes input while shown.
#[derive(Default)]
pub struct AckDialog {
    text: String,
}

impl AckDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for AckDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let width = ACK_DIALOG_WIDTH
            .max(self.text.chars().count() as u16 + 4)
            .min(area.width);
        let height = ACK_DIALOG_HEIGHT.min(area.height);
        let dialog_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        f.render_widget(Clear, dialog_area);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(self.text.clone(), Styles::success())),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", Styles::selected())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        );
        f.render_widget(body, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                Some(Message::AcknowledgeDialog)
            }
            _ => None,
        }
    }
}
