use crate::schemas::TrademarkHit;
use chrono::DateTime;

/// Date format used for every timestamp shown to the user (`dd MMM yyyy`)
pub const DATE_FORMAT: &str = "%d %b %Y";
pub const MISSING_DATE: &str = "N/A";
/// Marker shown next to the registration date
pub const RENEWAL_MARKER: char = '⟳';
pub const TRUNCATION_SUFFIX: &str = "...";
/// Description text is cut to this many lines
pub const DESCRIPTION_MAX_LINES: usize = 2;

/// Indicator colour for a status. Renderers map it onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

pub fn status_tone(status_type: &str) -> StatusTone {
    match status_type.to_lowercase().as_str() {
        "registered" => StatusTone::Green,
        "pending" => StatusTone::Yellow,
        "abandoned" => StatusTone::Red,
        "others" => StatusTone::Blue,
        _ => StatusTone::Gray,
    }
}

/// "Dead/abandoned" for abandoned marks, "Live/<status>" otherwise.
///
/// The comparison is exact: "Abandoned" still reads as live even though its
/// colour is red.
pub fn status_label(status_type: &str) -> String {
    let prefix = if status_type == "abandoned" {
        "Dead"
    } else {
        "Live"
    };
    format!("{prefix}/{status_type}")
}

/// Epoch seconds to `dd MMM yyyy` in UTC
pub fn format_epoch_date(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_DATE.to_string())
}

/// Keep the first `max_lines` lines of `text`, appending "..." when anything was cut
pub fn truncate_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > max_lines {
        format!("{}{}", lines[..max_lines].join("\n"), TRUNCATION_SUFFIX)
    } else {
        text.to_string()
    }
}

pub fn description_preview(hit: &TrademarkHit) -> String {
    truncate_lines(&hit.description.join(", "), DESCRIPTION_MAX_LINES)
}

pub fn class_summary(hit: &TrademarkHit) -> String {
    if hit.class_codes.is_empty() {
        String::new()
    } else {
        format!("Classes: {}", hit.class_codes.join(", "))
    }
}

/// Multi-line block for one hit in non-interactive output
pub fn format_hit(hit: &TrademarkHit, use_color: bool) -> String {
    use colored::Colorize;

    let label = status_label(&hit.status_type);
    let status_line = format!(
        "{} on {}  {} {}",
        label,
        format_epoch_date(hit.status_date),
        RENEWAL_MARKER,
        format_epoch_date(hit.registration_date)
    );
    let details = format!(
        "{} | {} | filed {}",
        hit.current_owner,
        hit.id,
        format_epoch_date(hit.filing_date)
    );
    let classes = class_summary(hit);
    let description = description_preview(hit).replace('\n', " ");

    if use_color {
        let colored_status = match status_tone(&hit.status_type) {
            StatusTone::Green => status_line.green(),
            StatusTone::Yellow => status_line.yellow(),
            StatusTone::Red => status_line.red(),
            StatusTone::Blue => status_line.blue(),
            StatusTone::Gray => status_line.bright_black(),
        };
        format!(
            "{}\n  {}\n  {}\n  {} {}",
            hit.mark_identification.bold(),
            details.dimmed(),
            colored_status,
            classes.bright_cyan(),
            description
        )
    } else {
        format!(
            "{}\n  {}\n  {}\n  {} {}",
            hit.mark_identification, details, status_line, classes, description
        )
    }
}
