pub mod controls;
pub mod dialog;
pub mod facet_panel;
pub mod help_dialog;
pub mod hit_item;
pub mod list_cursor;
pub mod result_detail;
pub mod result_grid;
pub mod result_list;
pub mod search_bar;
pub mod status_filter;
pub mod tab_bar;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod view_layout_test;

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message
        .as_ref()
        .map(|msg| msg == EXIT_PROMPT)
        .unwrap_or(false)
}
