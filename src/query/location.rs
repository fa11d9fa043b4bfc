//! Shareable search locations.
//!
//! A `PageLocation` is the address-bar view of the search state: an absolute
//! `http(s)://<origin>/search?query=..&status=..` URL. The state container owns
//! the query and status; locations are derived from it and read back only at
//! startup and on history navigation.

use super::filters::StatusFilter;
use std::fmt;
use url::Url;

pub const SEARCH_PATH: &str = "/search";
pub const QUERY_PARAM: &str = "query";
pub const STATUS_PARAM: &str = "status";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// Location written on search submission. `status` is present only when set.
    pub fn for_search(origin: &Url, query: &str, status: StatusFilter) -> Self {
        let mut pairs = vec![(QUERY_PARAM.to_string(), query.to_string())];
        if !status.is_all() {
            pairs.push((STATUS_PARAM.to_string(), status.as_param().to_string()));
        }
        Self {
            url: with_pairs(search_url(origin), &pairs),
        }
    }

    /// Absolute link for sharing: both parameters are always present
    pub fn share_url(origin: &Url, query: &str, status: StatusFilter) -> String {
        let pairs = vec![
            (QUERY_PARAM.to_string(), query.to_string()),
            (STATUS_PARAM.to_string(), status.as_param().to_string()),
        ];
        with_pairs(search_url(origin), &pairs).to_string()
    }

    pub fn query(&self) -> String {
        self.param(QUERY_PARAM).unwrap_or_default()
    }

    /// Absent or unrecognized values map to `All`
    pub fn status(&self) -> StatusFilter {
        self.param(STATUS_PARAM)
            .map(|s| StatusFilter::from_param(&s))
            .unwrap_or_default()
    }

    /// Same location with the `status` parameter set, or removed for `All`.
    /// Other parameters are preserved in order.
    pub fn with_status(&self, status: StatusFilter) -> Self {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != STATUS_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if !status.is_all() {
            pairs.push((STATUS_PARAM.to_string(), status.as_param().to_string()));
        }
        Self {
            url: with_pairs(self.url.clone(), &pairs),
        }
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.url.query_pairs().any(|(k, _)| k == name)
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    fn param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

fn search_url(origin: &Url) -> Url {
    let mut url = origin.clone();
    url.set_path(SEARCH_PATH);
    url.set_query(None);
    url.set_fragment(None);
    url
}

fn with_pairs(mut url: Url, pairs: &[(String, String)]) -> Url {
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url
}
