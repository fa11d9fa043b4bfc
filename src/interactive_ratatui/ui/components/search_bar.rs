use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::text_input::TextInput;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const SEARCH_PLACEHOLDER: &str = "Search Trademark Here eg. Mickey Mouse";

/// Query input. Edits stay local until Enter submits them.
#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    focused: bool,
    is_searching: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.input.set_text(query);
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut title = vec![Span::raw(" Search ")];
        if self.is_searching {
            title.push(Span::styled("[searching...] ", Styles::dimmed()));
        }
        if let Some(msg) = &self.message {
            title.push(Span::styled(format!("- {msg} "), Styles::label()));
        }

        let block = Block::default()
            .title(Line::from(title))
            .title_bottom(Line::from(" Enter: Search ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        let input = Paragraph::new(Line::from(
            self.input.render_spans(SEARCH_PLACEHOLDER, self.focused),
        ))
        .block(block)
        .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SubmitQuery(self.input.text().to_string())),
            _ => {
                self.input.handle_key(key);
                None
            }
        }
    }
}
