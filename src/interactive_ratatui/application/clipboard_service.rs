use anyhow::{Result, anyhow};
use arboard::Clipboard;

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first use
#[derive(Default)]
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| anyhow!("Clipboard not available: {e}"))?;
            self.clipboard = Some(clipboard);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| anyhow!("Failed to copy to clipboard: {e}")),
            None => Err(anyhow!("Clipboard not available")),
        }
    }
}
