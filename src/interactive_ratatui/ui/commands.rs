use super::events::CopyContent;
use crate::interactive_ratatui::domain::models::SearchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch(SearchRequest),
    /// Copy a share link and confirm with a dialog
    ShareLink(String),
    CopyToClipboard(CopyContent),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
