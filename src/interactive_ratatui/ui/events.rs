use crate::interactive_ratatui::domain::models::{Focus, SearchResponse};
use crate::query::{FacetCategory, StatusFilter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyContent {
    MarkName(String),
    ImageUrl(String),
}

impl CopyContent {
    pub fn text(&self) -> &str {
        match self {
            CopyContent::MarkName(s) | CopyContent::ImageUrl(s) => s,
        }
    }

    pub fn confirmation(&self) -> &'static str {
        match self {
            CopyContent::MarkName(_) => "✓ Copied mark name",
            CopyContent::ImageUrl(_) => "✓ Copied image URL",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    SubmitQuery(String),
    SearchCompleted(SearchResponse),
    SelectResult(usize),
    ToggleDisplayMode,

    // Filters
    SelectStatus(StatusFilter),
    SwitchFacetTab(FacetCategory),
    FacetFilterChanged(String),
    ToggleFacet(String),

    // Focus
    FocusNext,
    FocusPrev,
    SetFocus(Focus),

    // Mode changes
    EnterResultDetail,
    ExitToSearch,
    ShowHelp,
    CloseHelp,

    // Location history
    NavigateBack,
    NavigateForward,

    // Auxiliary controls
    Share,
    ShareSucceeded,
    AcknowledgeDialog,
    FilterButtonPressed,
    MenuButtonPressed,

    // Clipboard
    CopyToClipboard(CopyContent),

    // UI events
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
