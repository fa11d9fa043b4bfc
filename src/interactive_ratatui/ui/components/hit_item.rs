//! Shared pieces for drawing one trademark hit in the list and grid layouts.

use crate::formatters::{
    RENEWAL_MARKER, class_summary, description_preview, format_epoch_date, status_label,
    status_tone,
};
use crate::interactive_ratatui::ui::components::view_layout::{Styles, tone_color};
use crate::schemas::TrademarkHit;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const STATUS_DOT: &str = "●";
pub const IMAGE_MARKER: &str = "[img]";

/// `● Live/registered`
pub fn status_line(hit: &TrademarkHit) -> Line<'static> {
    let tone = status_tone(&hit.status_type);
    Line::from(vec![
        Span::styled(format!("{STATUS_DOT} "), Style::default().fg(tone_color(tone))),
        Span::styled(status_label(&hit.status_type), Styles::status(tone)),
    ])
}

/// `on 01 Jan 2021`
pub fn status_date_line(hit: &TrademarkHit) -> Line<'static> {
    Line::from(vec![
        Span::styled("on ", Styles::dimmed()),
        Span::raw(format_epoch_date(hit.status_date)),
    ])
}

/// `⟳ 13 Sep 2020`
pub fn registration_line(hit: &TrademarkHit) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{RENEWAL_MARKER} "), Styles::label()),
        Span::raw(format_epoch_date(hit.registration_date)),
    ])
}

pub fn mark_line(hit: &TrademarkHit, width: usize) -> Line<'static> {
    Line::from(Span::styled(
        truncate_message(&hit.mark_identification, width),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Marks hits that carry a mark image; nothing otherwise
pub fn image_line(hit: &TrademarkHit) -> Option<Line<'static>> {
    hit.has_image()
        .then(|| Line::from(Span::styled(IMAGE_MARKER, Styles::dimmed())))
}

pub fn class_line(hit: &TrademarkHit, width: usize) -> Line<'static> {
    Line::from(Span::styled(
        truncate_message(&class_summary(hit), width),
        Styles::label(),
    ))
}

/// Description wrapped to `width` and clamped to `max_lines` visual lines
pub fn description_lines(hit: &TrademarkHit, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    clamp_lines(&description_preview(hit), width, max_lines)
        .into_iter()
        .map(Line::from)
        .collect()
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max_width {
        return text;
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let truncated: String = text.chars().take(max_width - 3).collect();
    format!("{truncated}...")
}

/// Greedy word wrap. Words longer than `max_width` are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let text = text.replace('\n', " ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > max_width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            lines.push(chars.drain(..max_width).collect());
        }
        let word: String = chars.into_iter().collect();
        let word_width = word.chars().count();
        if word_width == 0 {
            continue;
        }

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap and keep at most `max_lines`, marking the cut with "..."
pub fn clamp_lines(text: &str, max_width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, max_width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let width = max_width.saturating_sub(3);
            let kept: String = last.chars().take(width).collect();
            *last = format!("{kept}...");
        }
    }
    lines
}
