use crate::query::SearchParams;
use crate::schemas::SearchOutcome;
use crate::search::SearchError;
use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    ResultDetail,
    Help,
    /// Blocking dialog waiting for the user to acknowledge a message
    Acknowledge,
}

/// Which widget in the search screen receives keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    SearchInput,
    Results,
    StatusFilter,
    Facets,
    FacetFilter,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::SearchInput,
        Focus::Results,
        Focus::StatusFilter,
        Focus::Facets,
        Focus::FacetFilter,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Text-entry widgets consume printable keys
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::SearchInput | Focus::FacetFilter)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum DisplayMode {
    #[default]
    List,
    Grid,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::List => DisplayMode::Grid,
            DisplayMode::Grid => DisplayMode::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::List => "List View",
            DisplayMode::Grid => "Grid View",
        }
    }
}

/// How the facet list treats selected keys
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum FacetDisplayPolicy {
    /// Once a category has selections, only the selected buckets are listed
    #[default]
    SelectedOnly,
    /// Every matching bucket is listed and selected ones are marked
    Highlight,
}

/// Display options fixed at startup
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UiConfig {
    pub facet_policy: FacetDisplayPolicy,
    pub display_mode: DisplayMode,
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub params: SearchParams,
}

#[derive(Clone, Debug)]
pub struct SearchResponse {
    pub id: u64,
    pub outcome: Result<SearchOutcome, SearchError>,
}
