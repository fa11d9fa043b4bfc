use crate::formatters::format_epoch_date;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::ui::components::{
    Component, hit_item, list_cursor::ListCursor, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::TrademarkHit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

const COLUMN_SPACING: u16 = 1;

/// Table layout: one row per hit
#[derive(Default)]
pub struct ResultList {
    hits: Vec<TrademarkHit>,
    cursor: ListCursor,
    table_state: TableState,
    focused: bool,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_results(&mut self, hits: &[TrademarkHit], selected_index: usize) {
        if self.hits.as_slice() != hits {
            self.hits = hits.to_vec();
        }
        self.cursor.set_len(self.hits.len());
        self.cursor.select(selected_index);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected()
    }

    pub fn selected_hit(&self) -> Option<&TrademarkHit> {
        self.hits.get(self.cursor.selected())
    }

    fn build_row(hit: &TrademarkHit, desc_width: usize, details_width: usize) -> Row<'static> {
        let mut mark = vec![hit_item::mark_line(hit, MARK_COLUMN_WIDTH as usize)];
        mark.extend(hit_item::image_line(hit));
        let mark = Cell::from(Text::from(mark));

        let details = Cell::from(Text::from(vec![
            Line::from(hit_item::truncate_message(&hit.current_owner, details_width)),
            Line::from(Span::styled(hit.id.clone(), Styles::dimmed())),
            Line::from(vec![
                Span::styled("filed ", Styles::dimmed()),
                Span::raw(format_epoch_date(hit.filing_date)),
            ]),
        ]));

        let status = Cell::from(Text::from(vec![
            hit_item::status_line(hit),
            hit_item::status_date_line(hit),
            hit_item::registration_line(hit),
        ]));

        let mut description = vec![hit_item::class_line(hit, desc_width)];
        description.extend(hit_item::description_lines(
            hit,
            desc_width,
            DESCRIPTION_VISUAL_LINES,
        ));
        let description = Cell::from(Text::from(description));

        Row::new(vec![mark, details, status, description])
            .height(RESULT_ROW_HEIGHT - 1)
            .bottom_margin(1)
    }

    fn selection_message(&self, changed: bool) -> Option<Message> {
        changed.then(|| Message::SelectResult(self.cursor.selected()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        // Columns left after the fixed ones are split 1:2 between details and description
        let flexible = area
            .width
            .saturating_sub(2 + MARK_COLUMN_WIDTH + STATUS_COLUMN_WIDTH + 3 * COLUMN_SPACING + 2);
        let details_width = (flexible / 3) as usize;
        let desc_width = (flexible - flexible / 3) as usize;

        let rows: Vec<Row> = self
            .hits
            .iter()
            .map(|hit| Self::build_row(hit, desc_width.max(1), details_width.max(1)))
            .collect();

        let header = Row::new(vec!["Mark", "Details", "Status", "Class/Description"])
            .style(Styles::label())
            .bottom_margin(1);

        let table = Table::new(
            rows,
            [
                Constraint::Length(MARK_COLUMN_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(STATUS_COLUMN_WIDTH),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(
            Block::default()
                .title(format!(" Results ({}) ", self.hits.len()))
                .borders(Borders::ALL)
                .border_style(Styles::border(self.focused)),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

        self.table_state.select(if self.hits.is_empty() {
            None
        } else {
            Some(self.cursor.selected())
        });
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let changed = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.move_down(),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => self.cursor.move_up(),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.cursor.move_down()
            }
            KeyCode::PageUp => self.cursor.page_up(),
            KeyCode::PageDown => self.cursor.page_down(),
            KeyCode::Home => self.cursor.move_to_start(),
            KeyCode::End => self.cursor.move_to_end(),
            KeyCode::Enter => return Some(Message::EnterResultDetail),
            _ => return None,
        };
        self.selection_message(changed)
    }
}
