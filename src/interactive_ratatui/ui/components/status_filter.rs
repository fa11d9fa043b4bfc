use crate::interactive_ratatui::ui::components::{Component, view_layout::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crate::query::StatusFilter;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Radio row of status values; the current one is highlighted
#[derive(Default)]
pub struct StatusFilterBar {
    current: StatusFilter,
    focused: bool,
}

impl StatusFilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current(&mut self, status: StatusFilter) {
        self.current = status;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Component for StatusFilterBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let spans: Vec<Span> = StatusFilter::ALL
            .iter()
            .map(|status| {
                if *status == self.current {
                    Span::styled(
                        format!(" {} ", status.label()),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(format!(" {} ", status.label()), Styles::dimmed())
                }
            })
            .collect();

        let bar = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Status (s/S) ")
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            );
        f.render_widget(bar, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Message::SelectStatus(self.current.prev())),
            KeyCode::Right | KeyCode::Char('l') => {
                Some(Message::SelectStatus(self.current.next()))
            }
            KeyCode::Char('a') => Some(Message::SelectStatus(StatusFilter::All)),
            KeyCode::Char('r') => Some(Message::SelectStatus(StatusFilter::Registered)),
            KeyCode::Char('p') => Some(Message::SelectStatus(StatusFilter::Pending)),
            KeyCode::Char('d') => Some(Message::SelectStatus(StatusFilter::Abandoned)),
            KeyCode::Char('o') => Some(Message::SelectStatus(StatusFilter::Others)),
            _ => None,
        }
    }
}
