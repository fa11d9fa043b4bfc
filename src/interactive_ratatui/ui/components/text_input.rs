use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Single-line editor with emacs-style bindings.
///
/// The cursor is a char index, never a byte index.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor = position.min(self.char_len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Remove chars in `start..end` and park the cursor at `start`
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_len() {
            return false;
        }
        let (byte_start, byte_end) = (self.byte_offset(start), self.byte_offset(end));
        self.text.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        self.cursor > 0 && self.delete_range(self.cursor - 1, self.cursor)
    }

    fn delete_at_cursor(&mut self) -> bool {
        let cursor = self.cursor;
        let deleted = self.delete_range(cursor, cursor + 1);
        self.cursor = cursor;
        deleted
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Text with a block cursor, or the dimmed placeholder when empty and focused out
    pub fn render_spans(&self, placeholder: &str, focused: bool) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        if self.text.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            if !placeholder.is_empty() {
                spans.push(Span::styled(
                    placeholder.to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            return spans;
        }

        if !focused {
            return vec![Span::raw(self.text.clone())];
        }

        let split = self.byte_offset(self.cursor);
        let (before, after) = self.text.split_at(split);
        let mut after_chars = after.chars();
        let under_cursor = after_chars.next().unwrap_or(' ');
        let rest: String = after_chars.collect();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before.to_string()));
        }
        spans.push(Span::styled(under_cursor.to_string(), cursor_style));
        if !rest.is_empty() {
            spans.push(Span::raw(rest));
        }
        spans
    }

    /// Handle a key event and return true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.cursor = (self.cursor + 1).min(self.char_len());
                    false
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_at_cursor(),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary(self.cursor);
                    self.delete_range(start, self.cursor)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                KeyCode::Char('k') => self.delete_range(self.cursor, self.char_len()),
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => self.cursor = self.prev_word_boundary(self.cursor),
                KeyCode::Char('f') => self.cursor = self.next_word_boundary(self.cursor),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }
}
