use super::trademark_formatter::format_hit;
use crate::schemas::SearchOutcome;
use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

/// Print one search outcome in the requested format
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    outcome: &SearchOutcome,
    duration: Duration,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if outcome.hits.is_empty() {
                writeln!(out, "No results found.")?;
            } else {
                writeln!(out, "Found {} results:\n", outcome.hits.len())?;
                for hit in &outcome.hits {
                    writeln!(out, "{}\n", format_hit(hit, use_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": outcome.hits,
                "aggregations": outcome.aggregations,
                "duration_ms": duration.as_millis(),
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for hit in &outcome.hits {
                serde_json::to_writer(&mut *out, hit)?;
                writeln!(out)?;
            }
            // Metadata goes last
            let metadata = serde_json::json!({
                "_metadata": {
                    "duration_ms": duration.as_millis(),
                    "returned_count": outcome.hits.len(),
                }
            });
            serde_json::to_writer(&mut *out, &metadata)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
