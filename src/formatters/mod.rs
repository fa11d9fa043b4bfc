pub mod output;
pub mod trademark_formatter;


pub use output::{OutputFormat, write_outcome};
pub use trademark_formatter::{
    DATE_FORMAT, DESCRIPTION_MAX_LINES, MISSING_DATE, RENEWAL_MARKER, StatusTone, class_summary,
    description_preview, format_epoch_date, format_hit, status_label, status_tone, truncate_lines,
};
