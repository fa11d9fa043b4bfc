use std::fmt;
use std::str::FromStr;

/// Status filter applied to a search. `All` means "no filter".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Registered,
    Pending,
    Abandoned,
    Others,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Registered,
        StatusFilter::Pending,
        StatusFilter::Abandoned,
        StatusFilter::Others,
    ];

    /// Value used in the `status` location parameter and the request body
    pub fn as_param(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Registered => "registered",
            StatusFilter::Pending => "pending",
            StatusFilter::Abandoned => "abandoned",
            StatusFilter::Others => "others",
        }
    }

    /// Lenient parse used for location parameters: anything unrecognized is `All`
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Registered => "Registered",
            StatusFilter::Pending => "Pending",
            StatusFilter::Abandoned => "Abandoned",
            StatusFilter::Others => "Others",
        }
    }

    pub fn is_all(self) -> bool {
        self == StatusFilter::All
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The request body carries zero or one status value
    pub fn to_request_list(self) -> Vec<String> {
        if self.is_all() {
            Vec::new()
        } else {
            vec![self.as_param().to_string()]
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "registered" => Ok(StatusFilter::Registered),
            "pending" => Ok(StatusFilter::Pending),
            "abandoned" => Ok(StatusFilter::Abandoned),
            "others" => Ok(StatusFilter::Others),
            other => Err(format!(
                "unknown status '{other}' (expected registered, pending, abandoned, others or all)"
            )),
        }
    }
}

/// Facet dimension a selection applies to.
///
/// Each variant maps explicitly to its display label, its selection key in the
/// request body and its aggregation key in the response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FacetCategory {
    #[default]
    Owners,
    LawFirms,
    Attorneys,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 3] = [
        FacetCategory::Owners,
        FacetCategory::LawFirms,
        FacetCategory::Attorneys,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FacetCategory::Owners => "Owners",
            FacetCategory::LawFirms => "Law Firms",
            FacetCategory::Attorneys => "Attorneys",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FacetCategory::Owners => "owners",
            FacetCategory::LawFirms => "law_firms",
            FacetCategory::Attorneys => "attorneys",
        }
    }

    pub fn aggregation_key(self) -> &'static str {
        match self {
            FacetCategory::Owners => "current_owners",
            FacetCategory::LawFirms => "law_firms",
            FacetCategory::Attorneys => "attorneys",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FacetCategory::Owners => FacetCategory::LawFirms,
            FacetCategory::LawFirms => FacetCategory::Attorneys,
            FacetCategory::Attorneys => FacetCategory::Owners,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FacetCategory::Owners => FacetCategory::Attorneys,
            FacetCategory::LawFirms => FacetCategory::Owners,
            FacetCategory::Attorneys => FacetCategory::LawFirms,
        }
    }
}

/// Selected facet keys per category. Keys are unique and keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    owners: Vec<String>,
    law_firms: Vec<String>,
    attorneys: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self, category: FacetCategory) -> &[String] {
        match category {
            FacetCategory::Owners => &self.owners,
            FacetCategory::LawFirms => &self.law_firms,
            FacetCategory::Attorneys => &self.attorneys,
        }
    }

    fn keys_mut(&mut self, category: FacetCategory) -> &mut Vec<String> {
        match category {
            FacetCategory::Owners => &mut self.owners,
            FacetCategory::LawFirms => &mut self.law_firms,
            FacetCategory::Attorneys => &mut self.attorneys,
        }
    }

    pub fn contains(&self, category: FacetCategory, key: &str) -> bool {
        self.keys(category).iter().any(|k| k == key)
    }

    /// Add `key` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, category: FacetCategory, key: &str) -> bool {
        let keys = self.keys_mut(category);
        if let Some(pos) = keys.iter().position(|k| k == key) {
            keys.remove(pos);
            false
        } else {
            keys.push(key.to_string());
            true
        }
    }

    pub fn count(&self, category: FacetCategory) -> usize {
        self.keys(category).len()
    }

    pub fn is_empty(&self) -> bool {
        FacetCategory::ALL.iter().all(|c| self.keys(*c).is_empty())
    }
}

/// Everything that determines a search request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub status: StatusFilter,
    pub selection: Selection,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, status: StatusFilter, selection: Selection) -> Self {
        Self {
            query: query.into(),
            status,
            selection,
        }
    }

    /// Searches with an empty query are never sent; whitespace is a query
    pub fn is_searchable(&self) -> bool {
        !self.query.is_empty()
    }
}
