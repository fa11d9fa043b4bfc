use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::filter::FacetFilter;
use crate::interactive_ratatui::domain::models::{
    DisplayMode, FacetDisplayPolicy, Focus, SearchRequest, SearchResponse, UiConfig,
};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::navigation::LocationHistory;
use crate::query::{FacetCategory, PageLocation, SearchParams, Selection, StatusFilter};
use crate::schemas::{Aggregations, FacetBucket, TrademarkHit};
use tracing::{debug, info};
use url::Url;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";
pub const NOT_AVAILABLE_SUFFIX: &str = "is not available yet";

pub struct AppState {
    pub mode: Mode,
    /// Mode to return to when the help overlay closes
    pub previous_mode: Mode,
    pub focus: Focus,
    pub origin: Url,
    pub history: LocationHistory,
    pub search: SearchState,
    pub facets: FacetState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Last submitted query
    pub query: String,
    pub status: StatusFilter,
    pub selection: Selection,
    pub results: Vec<TrademarkHit>,
    pub aggregations: Aggregations,
    pub is_searching: bool,
    pub error: Option<String>,
    /// Id of the newest request; responses carrying any other id are stale
    pub latest_request_id: u64,
    pub selected_index: usize,
    pub display_mode: DisplayMode,
}

pub struct FacetState {
    pub active: FacetCategory,
    /// Local text filter, shared by every tab
    pub filter_text: String,
    pub policy: FacetDisplayPolicy,
}

pub struct UiState {
    pub message: Option<String>,
    /// Text of the blocking dialog shown in `Mode::Acknowledge`
    pub dialog: Option<String>,
    pub selected_result: Option<TrademarkHit>,
    pub detail_scroll_offset: usize,
}

impl AppState {
    pub fn new(origin: Url, config: UiConfig) -> Self {
        Self {
            mode: Mode::Search,
            previous_mode: Mode::Search,
            focus: Focus::SearchInput,
            origin,
            history: LocationHistory::new(MAX_NAVIGATION_HISTORY),
            search: SearchState {
                query: String::new(),
                status: StatusFilter::All,
                selection: Selection::new(),
                results: Vec::new(),
                aggregations: Aggregations::default(),
                is_searching: false,
                error: None,
                latest_request_id: 0,
                selected_index: 0,
                display_mode: config.display_mode,
            },
            facets: FacetState {
                active: FacetCategory::Owners,
                filter_text: String::new(),
                policy: config.facet_policy,
            },
            ui: UiState {
                message: None,
                dialog: None,
                selected_result: None,
                detail_scroll_offset: 0,
            },
        }
    }

    /// Adopt the startup location and issue the first search
    pub fn start(&mut self, location: PageLocation) -> Command {
        self.search.query = location.query();
        self.search.status = location.status();
        info!(location = %location, "starting search");
        self.history.push(location);
        self.request_search()
    }

    pub fn params(&self) -> SearchParams {
        SearchParams::new(
            self.search.query.clone(),
            self.search.status,
            self.search.selection.clone(),
        )
    }

    /// Buckets of the active category that the facet panel should list.
    ///
    /// Nothing is listed while a request is in flight, so the panel never
    /// offers buckets from a response other than the one being rendered.
    pub fn visible_buckets(&self) -> Vec<&FacetBucket> {
        if self.search.is_searching {
            return Vec::new();
        }
        let buckets = self.search.aggregations.buckets(self.facets.active);
        FacetFilter::visible_buckets(
            buckets,
            &self.facets.filter_text,
            self.search.selection.keys(self.facets.active),
            self.facets.policy,
        )
        .into_iter()
        .map(|idx| &buckets[idx])
        .collect()
    }

    pub fn share_url(&self) -> String {
        PageLocation::share_url(&self.origin, &self.search.query, self.search.status)
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SubmitQuery(query) => {
                self.search.query = query;
                let location =
                    PageLocation::for_search(&self.origin, &self.search.query, self.search.status);
                self.history.push(location);
                self.request_search()
            }
            Message::SearchCompleted(response) => self.apply_response(response),
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ToggleDisplayMode => {
                self.search.display_mode = self.search.display_mode.toggle();
                Command::None
            }
            Message::SelectStatus(status) => {
                self.search.status = status;
                let location = match self.history.current() {
                    Some(current) => current.with_status(status),
                    None => PageLocation::for_search(&self.origin, &self.search.query, status),
                };
                self.history.push(location);
                self.request_search()
            }
            Message::SwitchFacetTab(category) => {
                self.facets.active = category;
                Command::None
            }
            Message::FacetFilterChanged(text) => {
                self.facets.filter_text = text;
                Command::None
            }
            Message::ToggleFacet(key) => {
                let selected = self.search.selection.toggle(self.facets.active, &key);
                debug!(category = self.facets.active.key(), key = %key, selected, "facet toggled");
                self.request_search()
            }
            Message::FocusNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Message::FocusPrev => {
                self.focus = self.focus.prev();
                Command::None
            }
            Message::SetFocus(focus) => {
                self.focus = focus;
                Command::None
            }
            Message::EnterResultDetail => {
                if let Some(hit) = self.search.results.get(self.search.selected_index).cloned() {
                    self.ui.selected_result = Some(hit);
                    self.ui.detail_scroll_offset = 0;
                    self.mode = Mode::ResultDetail;
                }
                Command::None
            }
            Message::ExitToSearch => {
                self.mode = Mode::Search;
                self.ui.selected_result = None;
                self.ui.detail_scroll_offset = 0;
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.previous_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.previous_mode;
                }
                Command::None
            }
            Message::NavigateBack => match self.history.go_back() {
                Some(location) => self.restore_location(&location),
                None => Command::None,
            },
            Message::NavigateForward => match self.history.go_forward() {
                Some(location) => self.restore_location(&location),
                None => Command::None,
            },
            Message::Share => Command::ShareLink(self.share_url()),
            Message::ShareSucceeded => {
                self.ui.dialog = Some(LINK_COPIED_MESSAGE.to_string());
                self.previous_mode = self.mode;
                self.mode = Mode::Acknowledge;
                Command::None
            }
            Message::AcknowledgeDialog => {
                self.ui.dialog = None;
                if self.mode == Mode::Acknowledge {
                    self.mode = self.previous_mode;
                }
                Command::None
            }
            Message::FilterButtonPressed => {
                self.ui.message = Some(format!("Filter {NOT_AVAILABLE_SUFFIX}"));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::MenuButtonPressed => {
                self.ui.message = Some(format!("Menu {NOT_AVAILABLE_SUFFIX}"));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::CopyToClipboard(content) => Command::CopyToClipboard(content),
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// Issue a search for the current parameters.
    ///
    /// An empty query never reaches the network: results are cleared instead.
    /// The request id still advances so in-flight responses become stale.
    fn request_search(&mut self) -> Command {
        self.search.latest_request_id += 1;
        let params = self.params();

        if !params.is_searchable() {
            self.search.results.clear();
            self.search.aggregations = Aggregations::default();
            self.search.error = None;
            self.search.is_searching = false;
            self.search.selected_index = 0;
            return Command::None;
        }

        self.search.is_searching = true;
        self.search.error = None;
        Command::ExecuteSearch(SearchRequest {
            id: self.search.latest_request_id,
            params,
        })
    }

    fn apply_response(&mut self, response: SearchResponse) -> Command {
        if response.id != self.search.latest_request_id {
            debug!(
                id = response.id,
                latest = self.search.latest_request_id,
                "dropping stale search response"
            );
            return Command::None;
        }

        self.search.is_searching = false;
        match response.outcome {
            Ok(outcome) => {
                debug!(hits = outcome.hits.len(), "search response applied");
                self.search.results = outcome.hits;
                self.search.aggregations = outcome.aggregations;
                self.search.error = None;
            }
            Err(e) => {
                tracing::warn!("search failed: {e}");
                self.search.results.clear();
                self.search.aggregations = Aggregations::default();
                self.search.error = Some(e.user_message());
            }
        }
        self.search.selected_index = 0;
        Command::None
    }

    /// Only the status is read back from a restored location
    fn restore_location(&mut self, location: &PageLocation) -> Command {
        let status = location.status();
        if status == self.search.status {
            return Command::None;
        }
        self.search.status = status;
        self.request_search()
    }
}
