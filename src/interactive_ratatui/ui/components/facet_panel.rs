use crate::interactive_ratatui::domain::models::Focus;
use crate::interactive_ratatui::ui::components::{
    Component, list_cursor::ListCursor, tab_bar::TabBar, text_input::TextInput,
    view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::query::FacetCategory;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub const FILTER_PLACEHOLDER: &str = "Search owners, firms, attorneys";
pub const NO_BUCKETS_MESSAGE: &str = "No matching entries";

/// One row of the facet list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetRow {
    pub key: String,
    pub doc_count: u64,
    pub selected: bool,
}

/// Tabs, local filter box and the bucket checklist for the active category
#[derive(Default)]
pub struct FacetPanel {
    tabs: TabBar,
    filter: TextInput,
    rows: Vec<FacetRow>,
    cursor: ListCursor,
    list_state: ListState,
    list_focused: bool,
    filter_focused: bool,
}

impl FacetPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, active: FacetCategory, counts: [usize; 3], rows: Vec<FacetRow>) {
        self.tabs.set_current_tab(active);
        self.tabs.set_counts(counts);
        self.rows = rows;
        self.cursor.set_len(self.rows.len());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.list_focused = focus == Focus::Facets;
        self.filter_focused = focus == Focus::FacetFilter;
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    pub fn selected_row(&self) -> Option<&FacetRow> {
        self.rows.get(self.cursor.selected())
    }

    fn row_item(row: &FacetRow) -> ListItem<'static> {
        let (marker, style) = if row.selected {
            ("[x] ", Styles::success())
        } else {
            ("[ ] ", Styles::normal())
        };
        ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(row.key.clone(), style),
            Span::styled(format!(" ({})", row.doc_count), Styles::dimmed()),
        ]))
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Down => Some(Message::SetFocus(Focus::Facets)),
            _ => {
                if self.filter.handle_key(key) {
                    self.cursor.select(0);
                    Some(Message::FacetFilterChanged(self.filter.text().to_string()))
                } else {
                    None
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.cursor.move_up() && self.cursor.selected() == 0 {
                    return Some(Message::SetFocus(Focus::FacetFilter));
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.move_down();
                None
            }
            KeyCode::Home => {
                self.cursor.move_to_start();
                None
            }
            KeyCode::End => {
                self.cursor.move_to_end();
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self
                .selected_row()
                .map(|row| Message::ToggleFacet(row.key.clone())),
            _ => self.tabs.handle_key(key),
        }
    }
}

impl Component for FacetPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Facets ")
            .borders(Borders::ALL)
            .border_style(Styles::border(self.list_focused || self.filter_focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Length(3), // Filter input
                Constraint::Min(0),    // Buckets
            ])
            .split(inner);

        self.tabs.render(f, chunks[0]);

        let filter = Paragraph::new(Line::from(
            self.filter
                .render_spans(FILTER_PLACEHOLDER, self.filter_focused),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(self.filter_focused)),
        );
        f.render_widget(filter, chunks[1]);

        if self.rows.is_empty() {
            f.render_widget(
                Paragraph::new(NO_BUCKETS_MESSAGE).style(Styles::dimmed()),
                chunks[2],
            );
            return;
        }

        let items: Vec<ListItem> = self.rows.iter().map(Self::row_item).collect();
        let list = List::new(items).highlight_style(if self.list_focused {
            Styles::selected()
        } else {
            Styles::normal()
        });
        self.list_state.select(Some(self.cursor.selected()));
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.filter_focused {
            self.handle_filter_key(key)
        } else {
            self.handle_list_key(key)
        }
    }
}
