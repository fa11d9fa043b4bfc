pub mod filters;
pub mod location;

#[cfg(test)]
mod filters_test;

pub use filters::{FacetCategory, SearchParams, Selection, StatusFilter};
pub use location::PageLocation;
