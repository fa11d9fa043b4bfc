use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Trademark Search - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Enter       - Run search for the typed mark"),
            Line::from("  Tab/S-Tab   - Move focus between panels"),
            Line::from("  /           - Focus the search box"),
            Line::from("  s / S       - Next / previous status filter"),
            Line::from("  v           - Toggle grid and list view"),
            Line::from("  y           - Copy a share link for this search"),
            Line::from("  Alt+←/→     - Back / forward through past searches"),
            Line::from("  Esc         - Back to the search box, quit from it"),
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓ ←/→     - Move selection"),
            Line::from("  Enter       - Open trademark details"),
            Line::from(""),
            Self::section("Facets:"),
            Line::from("  [ / ]       - Owners, law firms, attorneys"),
            Line::from("  Space       - Select or deselect an entry"),
            Line::from("  Type        - Narrow entries in the filter box"),
            Line::from(""),
            Self::section("Details:"),
            Line::from("  c           - Copy mark name"),
            Line::from("  u           - Copy image URL"),
            Line::from("  Esc/Bksp    - Back to results"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        let dialog_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
