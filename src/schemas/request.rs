use crate::query::{FacetCategory, SearchParams};
use serde::Serialize;

/// JSON body posted to the search endpoint. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequestBody {
    pub input_query: String,
    pub input_query_type: String,
    pub sort_by: String,
    pub status: Vec<String>,
    pub exact_match: bool,
    pub date_query: bool,
    pub owners: Vec<String>,
    pub attorneys: Vec<String>,
    pub law_firms: Vec<String>,
    pub mark_description_description: Vec<String>,
    pub classes: Vec<String>,
    pub page: u32,
    pub rows: u32,
    pub sort_order: String,
    pub states: Vec<String>,
    pub counties: Vec<String>,
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_ROWS: u32 = 10;

impl From<&SearchParams> for SearchRequestBody {
    fn from(params: &SearchParams) -> Self {
        let keys = |category: FacetCategory| params.selection.keys(category).to_vec();

        Self {
            input_query: params.query.clone(),
            input_query_type: String::new(),
            sort_by: "default".to_string(),
            status: params.status.to_request_list(),
            exact_match: false,
            date_query: false,
            owners: keys(FacetCategory::Owners),
            attorneys: keys(FacetCategory::Attorneys),
            law_firms: keys(FacetCategory::LawFirms),
            mark_description_description: Vec::new(),
            classes: Vec::new(),
            page: DEFAULT_PAGE,
            rows: DEFAULT_ROWS,
            sort_order: "desc".to_string(),
            states: Vec::new(),
            counties: Vec::new(),
        }
    }
}
