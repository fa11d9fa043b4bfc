pub mod formatters;
pub mod interactive_ratatui;
pub mod logging;
pub mod query;
pub mod schemas;
pub mod search;

pub use formatters::format_hit;
pub use query::{FacetCategory, PageLocation, SearchParams, Selection, StatusFilter};
pub use schemas::{Aggregations, FacetBucket, SearchOutcome, TrademarkHit};
pub use search::{SearchBackend, SearchClient, SearchConfig, SearchError};
