use crate::query::FacetCategory;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Facet category tabs: Owners │ Law Firms │ Attorneys
#[derive(Default)]
pub struct TabBar {
    current: FacetCategory,
    /// Selected key count per category, shown next to the label
    counts: [usize; 3],
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_tab(&mut self, category: FacetCategory) {
        self.current = category;
    }

    pub fn set_counts(&mut self, counts: [usize; 3]) {
        self.counts = counts;
    }

    fn tab_span(&self, category: FacetCategory, count: usize) -> Span<'static> {
        let label = if count > 0 {
            format!("{} ({count})", category.label())
        } else {
            category.label().to_string()
        };

        if category == self.current {
            Span::styled(
                format!(" ▸ {label} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("   {label} "),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, category) in FacetCategory::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(self.tab_span(*category, self.counts[i]));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('[') | KeyCode::Left => {
                Some(Message::SwitchFacetTab(self.current.prev()))
            }
            KeyCode::Char(']') | KeyCode::Right => {
                Some(Message::SwitchFacetTab(self.current.next()))
            }
            _ => None,
        }
    }
}
