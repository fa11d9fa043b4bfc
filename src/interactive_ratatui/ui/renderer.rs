use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{DisplayMode, Focus};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, controls,
    dialog::AckDialog,
    facet_panel::{FacetPanel, FacetRow},
    help_dialog::HelpDialog,
    result_detail::ResultDetail,
    result_grid::ResultGrid,
    result_list::ResultList,
    search_bar::SearchBar,
    status_filter::StatusFilterBar,
    view_layout::Styles,
};
use crate::query::FacetCategory;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::Instant;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_PROMPT: &str = "Search for something...";
pub const EMPTY_HINT: &str = "Please try refine your search.";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    result_grid: ResultGrid,
    result_detail: ResultDetail,
    facet_panel: FacetPanel,
    status_filter: StatusFilterBar,
    help_dialog: HelpDialog,
    ack_dialog: AckDialog,
    /// Query last pushed into the search bar; local edits are kept until it changes
    synced_query: Option<String>,
    started: Instant,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            result_grid: ResultGrid::new(),
            result_detail: ResultDetail::new(),
            facet_panel: FacetPanel::new(),
            status_filter: StatusFilterBar::new(),
            help_dialog: HelpDialog::new(),
            ack_dialog: AckDialog::new(),
            synced_query: None,
            started: Instant::now(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::ResultDetail => self.render_detail_mode(f, state),
            Mode::Help => {
                self.render_base(f, state, state.previous_mode);
                self.help_dialog.render(f, f.area());
            }
            Mode::Acknowledge => {
                self.render_base(f, state, state.previous_mode);
                if let Some(text) = &state.ui.dialog {
                    self.ack_dialog.set_text(text);
                }
                self.ack_dialog.render(f, f.area());
            }
        }
    }

    /// Screen under an overlay
    fn render_base(&mut self, f: &mut Frame, state: &AppState, mode: Mode) {
        match mode {
            Mode::ResultDetail => self.render_detail_mode(f, state),
            _ => self.render_search_mode(f, state),
        }
    }

    fn sync_components(&mut self, state: &AppState) {
        if self.synced_query.as_deref() != Some(state.search.query.as_str()) {
            self.search_bar.set_query(&state.search.query);
            self.synced_query = Some(state.search.query.clone());
        }
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar
            .set_focused(state.focus == Focus::SearchInput);

        let results_focused = state.focus == Focus::Results;
        self.result_list
            .update_results(&state.search.results, state.search.selected_index);
        self.result_list.set_focused(results_focused);
        self.result_grid
            .update_results(&state.search.results, state.search.selected_index);
        self.result_grid.set_focused(results_focused);

        self.status_filter.set_current(state.search.status);
        self.status_filter
            .set_focused(state.focus == Focus::StatusFilter);

        let selection = &state.search.selection;
        let rows = state
            .visible_buckets()
            .into_iter()
            .map(|bucket| FacetRow {
                key: bucket.key.clone(),
                doc_count: bucket.doc_count,
                selected: selection.contains(state.facets.active, &bucket.key),
            })
            .collect();
        let counts = FacetCategory::ALL.map(|category| selection.count(category));
        self.facet_panel.update(state.facets.active, counts, rows);
        self.facet_panel.set_focus(state.focus);
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.sync_components(state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(HINT_BAR_HEIGHT),
            ])
            .split(f.area());

        self.search_bar.render(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(RESULTS_WIDTH_PERCENT),
                Constraint::Percentage(100 - RESULTS_WIDTH_PERCENT),
            ])
            .split(chunks[1]);

        self.render_results(f, body[0], state);
        self.render_sidebar(f, body[1], state);
        self.render_hint_bar(f, chunks[2], state);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        if state.search.is_searching {
            let frame = (self.started.elapsed().as_millis() / SPINNER_FRAME_MS) as usize
                % SPINNER_FRAMES.len();
            let text = Line::from(vec![
                Span::styled(SPINNER_FRAMES[frame], Styles::label()),
                Span::raw(" "),
                Span::raw(LOADING_TEXT),
            ]);
            self.render_placeholder(f, area, vec![text]);
            return;
        }

        if let Some(error) = &state.search.error {
            let text = Line::from(Span::styled(format!("Error: {error}"), Styles::error()));
            self.render_placeholder(f, area, vec![text]);
            return;
        }

        if state.search.results.is_empty() {
            self.render_placeholder(
                f,
                area,
                vec![
                    Line::from(Span::styled(EMPTY_PROMPT, Styles::title())),
                    Line::from(""),
                    Line::from(Span::styled(EMPTY_HINT, Styles::dimmed())),
                ],
            );
            return;
        }

        match state.search.display_mode {
            DisplayMode::List => self.result_list.render(f, area),
            DisplayMode::Grid => self.result_grid.render(f, area),
        }
    }

    fn render_placeholder(&self, f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let block = Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Styles::dimmed());
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Vertically centred
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let text_area = Rect::new(
            inner.x,
            inner.y + top,
            inner.width,
            inner.height.saturating_sub(top),
        );
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, text_area);
    }

    fn render_sidebar(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Length(STATUS_FILTER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(DISPLAY_TOGGLE_HEIGHT),
            ])
            .split(area);

        controls::render_buttons(f, chunks[0]);
        self.status_filter.render(f, chunks[1]);
        self.facet_panel.render(f, chunks[2]);
        controls::render_display_toggle(f, chunks[3], state.search.display_mode);
    }

    fn render_hint_bar(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let hints = match state.focus {
            Focus::SearchInput => "Enter: Search | Tab: Next panel | ?/F1: Help | Esc: Quit",
            Focus::Results => "↑/↓: Select | Enter: Details | v: Grid/List | y: Share | ?: Help",
            Focus::StatusFilter => "←/→: Change status | s/S: Cycle | Tab: Next panel | ?: Help",
            Focus::Facets => "Space: Select | [/]: Category | ↑: Filter | Tab: Next panel",
            Focus::FacetFilter => "Type to narrow entries | Enter: List | Tab: Next panel",
        };

        let mut spans = vec![Span::styled(hints, Styles::dimmed())];
        if state.history.can_go_back() || state.history.can_go_forward() {
            spans.push(Span::styled(" | Alt+←/→: History", Styles::dimmed()));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        if let Some(hit) = &state.ui.selected_result {
            self.result_detail.set_hit(hit.clone());
            self.result_detail.set_message(state.ui.message.clone());
            self.result_detail.render(f, f.area());
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_result_grid_mut(&mut self) -> &mut ResultGrid {
        &mut self.result_grid
    }

    pub fn get_result_detail_mut(&mut self) -> &mut ResultDetail {
        &mut self.result_detail
    }

    pub fn get_facet_panel_mut(&mut self) -> &mut FacetPanel {
        &mut self.facet_panel
    }

    pub fn get_status_filter_mut(&mut self) -> &mut StatusFilterBar {
        &mut self.status_filter
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }

    pub fn get_ack_dialog_mut(&mut self) -> &mut AckDialog {
        &mut self.ack_dialog
    }
}
