pub mod request;
pub mod trademark;


pub use request::SearchRequestBody;
pub use trademark::{Aggregations, BucketList, FacetBucket, SearchOutcome, TrademarkHit};
