use crate::formatters::format_epoch_date;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::ui::components::{
    Component, hit_item, list_cursor::ListCursor, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::TrademarkHit;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Card layout: as many cards per row as fit the width
#[derive(Default)]
pub struct ResultGrid {
    hits: Vec<TrademarkHit>,
    cursor: ListCursor,
    columns: usize,
    scroll_row: usize,
    focused: bool,
}

impl ResultGrid {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    pub fn update_results(&mut self, hits: &[TrademarkHit], selected_index: usize) {
        if self.hits.as_slice() != hits {
            self.hits = hits.to_vec();
            self.scroll_row = 0;
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

    /// Cards per row at the last render
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn card_lines(hit: &TrademarkHit, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(hit_item::truncate_message(&hit.current_owner, width)),
            Line::from(vec![
                Span::styled(hit_item::truncate_message(&hit.id, width / 2), Styles::dimmed()),
                Span::styled("  filed ", Styles::dimmed()),
                Span::raw(format_epoch_date(hit.filing_date)),
            ]),
            hit_item::status_line(hit),
        ];

        let mut dates = hit_item::status_date_line(hit).spans;
        dates.push(Span::raw("  "));
        dates.extend(hit_item::registration_line(hit).spans);
        lines.push(Line::from(dates));

        lines.push(hit_item::class_line(hit, width));
        lines.extend(hit_item::description_lines(
            hit,
            width,
            DESCRIPTION_VISUAL_LINES,
        ));
        lines
    }

    fn render_card(&self, f: &mut Frame, area: Rect, index: usize) {
        let Some(hit) = self.hits.get(index) else {
            return;
        };
        let selected = index == self.cursor.selected();
        let title_width = area.width.saturating_sub(4) as usize;

        let mut block = Block::default()
            .title(Span::styled(
                format!(
                    " {} ",
                    hit_item::truncate_message(&hit.mark_identification, title_width)
                ),
                if selected {
                    Styles::selected()
                } else {
                    Styles::title()
                },
            ))
            .borders(Borders::ALL)
            .border_style(Styles::border(selected && self.focused));
        if let Some(marker) = hit_item::image_line(hit) {
            block = block.title_bottom(marker.right_aligned());
        }

        let width = area.width.saturating_sub(2) as usize;
        let card = Paragraph::new(Self::card_lines(hit, width.max(1))).block(block);
        f.render_widget(card, area);
    }

    fn keep_selection_visible(&mut self, visible_rows: usize) {
        let selected_row = self.cursor.selected() / self.columns.max(1);
        if selected_row < self.scroll_row {
            self.scroll_row = selected_row;
        } else if visible_rows > 0 && selected_row >= self.scroll_row + visible_rows {
            self.scroll_row = selected_row + 1 - visible_rows;
        }
    }

    fn selection_message(&self, changed: bool) -> Option<Message> {
        changed.then(|| Message::SelectResult(self.cursor.selected()))
    }
}

impl Component for ResultGrid {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(format!(" Results ({}) ", self.hits.len()))
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        self.columns = ((inner.width / CARD_MIN_WIDTH) as usize).max(1);
        let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
        self.keep_selection_visible(visible_rows);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(inner);

        for (offset, row_area) in row_areas.iter().enumerate() {
            let row = self.scroll_row + offset;
            let card_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, self.columns as u32); self.columns])
                .split(*row_area);

            for (col, card_area) in card_areas.iter().enumerate() {
                self.render_card(f, *card_area, row * self.columns + col);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let columns = self.columns.max(1) as isize;
        let changed = match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor.move_up(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.move_down(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.selected() as isize >= columns && self.cursor.move_by(-columns)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                (self.cursor.selected() as isize + columns) < self.cursor.len() as isize
                    && self.cursor.move_by(columns)
            }
            KeyCode::Home => self.cursor.move_to_start(),
            KeyCode::End => self.cursor.move_to_end(),
            KeyCode::Enter => return Some(Message::EnterResultDetail),
            _ => return None,
        };
        self.selection_message(changed)
    }
}
