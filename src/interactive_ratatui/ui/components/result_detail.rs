use crate::formatters::{MISSING_DATE, format_epoch_date, status_label, status_tone};
use crate::interactive_ratatui::ui::components::{
    Component,
    view_layout::{Styles, ViewLayout},
};
use crate::interactive_ratatui::ui::events::{CopyContent, Message};
use crate::schemas::TrademarkHit;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const DETAIL_HINTS: &str = "↑/↓: Scroll | c: Copy mark | u: Copy image URL | Esc: Back";

/// Full record of one trademark
#[derive(Default)]
pub struct ResultDetail {
    hit: Option<TrademarkHit>,
    scroll_offset: usize,
    message: Option<String>,
}

impl ResultDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hit(&mut self, hit: TrademarkHit) {
        if self.hit.as_ref() != Some(&hit) {
            self.scroll_offset = 0;
        }
        self.hit = Some(hit);
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Styles::label()),
            Span::raw(value),
        ])
    }

    fn or_missing(value: &str) -> String {
        if value.is_empty() {
            MISSING_DATE.to_string()
        } else {
            value.to_string()
        }
    }

    fn detail_lines(hit: &TrademarkHit) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::field("Mark:", hit.mark_identification.clone()),
            Self::field("Owner:", Self::or_missing(&hit.current_owner)),
            Self::field("Serial:", hit.id.clone()),
            Self::field(
                "Registration:",
                Self::or_missing(&hit.registration_number),
            ),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Status:"), Styles::label()),
                Span::styled(
                    status_label(&hit.status_type),
                    Styles::status(status_tone(&hit.status_type)),
                ),
            ]),
            Self::field("Status date:", format_epoch_date(hit.status_date)),
            Self::field("Filed:", format_epoch_date(hit.filing_date)),
            Self::field("Registered:", format_epoch_date(hit.registration_date)),
            Self::field("Law firm:", Self::or_missing(&hit.law_firm)),
            Self::field("Attorney:", Self::or_missing(&hit.attorney)),
            Self::field(
                "Classes:",
                if hit.class_codes.is_empty() {
                    MISSING_DATE.to_string()
                } else {
                    hit.class_codes.join(", ")
                },
            ),
            Self::field(
                "Image:",
                if hit.has_image() {
                    hit.image_url.clone()
                } else {
                    MISSING_DATE.to_string()
                },
            ),
            Line::from(""),
            Line::from(Span::styled("Description:", Styles::label())),
        ];
        lines.extend(hit.description.iter().map(|d| Line::from(d.clone())));
        lines
    }
}

impl Component for ResultDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(hit) = &self.hit else {
            return;
        };

        let status_text = self.message.clone().unwrap_or_else(|| DETAIL_HINTS.to_string());
        let layout = ViewLayout::new(format!("Trademark Detail - {}", hit.mark_identification))
            .with_subtitle(hit.current_owner.clone())
            .with_status_text(status_text);

        let lines = Self::detail_lines(hit);
        let scroll = self.scroll_offset.min(lines.len().saturating_sub(1)) as u16;

        layout.render(f, area, |f, content_area| {
            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            f.render_widget(paragraph, content_area);
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset += 1;
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset += 10;
                None
            }
            KeyCode::Char('c') => self.hit.as_ref().map(|hit| {
                Message::CopyToClipboard(CopyContent::MarkName(hit.mark_identification.clone()))
            }),
            KeyCode::Char('u') => self
                .hit
                .as_ref()
                .filter(|hit| hit.has_image())
                .map(|hit| Message::CopyToClipboard(CopyContent::ImageUrl(hit.image_url.clone()))),
            KeyCode::Backspace | KeyCode::Esc => Some(Message::ExitToSearch),
            _ => None,
        }
    }
}
