use crate::query::FacetCategory;
use crate::search::SearchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display model for one search hit.
///
/// Built defensively from the raw `_source` document: missing or mistyped
/// fields become empty strings, zero timestamps or empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrademarkHit {
    pub id: String,
    pub mark_identification: String,
    pub current_owner: String,
    pub registration_number: String,
    /// Epoch seconds
    pub filing_date: i64,
    pub status_type: String,
    pub status_date: i64,
    pub registration_date: i64,
    pub description: Vec<String>,
    pub class_codes: Vec<String>,
    pub image_url: String,
    pub law_firm: String,
    pub attorney: String,
}

impl TrademarkHit {
    pub fn from_json(item: &Value) -> Self {
        let source = item.get("_source").unwrap_or(&Value::Null);

        Self {
            id: text_field(item, "_id"),
            mark_identification: text_field(source, "mark_identification"),
            current_owner: text_field(source, "current_owner"),
            registration_number: text_field(source, "registration_number"),
            filing_date: epoch_field(source, "filing_date"),
            status_type: text_field(source, "status_type"),
            status_date: epoch_field(source, "status_date"),
            registration_date: epoch_field(source, "registration_date"),
            description: list_field(source, "mark_description_description"),
            class_codes: list_field(source, "class_codes"),
            image_url: text_field(source, "image_url"),
            law_firm: text_field(source, "law_firm"),
            attorney: text_field(source, "attorney_name"),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

// Registration numbers and ids sometimes arrive as numbers
fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn epoch_field(value: &Value, key: &str) -> i64 {
    match value.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn list_field(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketList {
    #[serde(default)]
    pub buckets: Vec<FacetBucket>,
}

/// Facet aggregations returned by the search API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_owners: Option<BucketList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_firms: Option<BucketList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attorneys: Option<BucketList>,
}

impl Aggregations {
    /// Map raw aggregations with the same tolerance as hits: a category that
    /// is not an object is absent, non-list `buckets` are empty, buckets
    /// without a key are skipped and counts may be floats or strings.
    pub fn from_json(value: &Value) -> Self {
        Self {
            current_owners: bucket_list(value, FacetCategory::Owners.aggregation_key()),
            law_firms: bucket_list(value, FacetCategory::LawFirms.aggregation_key()),
            attorneys: bucket_list(value, FacetCategory::Attorneys.aggregation_key()),
        }
    }

    pub fn buckets(&self, category: FacetCategory) -> &[FacetBucket] {
        let list = match category {
            FacetCategory::Owners => &self.current_owners,
            FacetCategory::LawFirms => &self.law_firms,
            FacetCategory::Attorneys => &self.attorneys,
        };
        list.as_ref().map(|l| l.buckets.as_slice()).unwrap_or(&[])
    }
}

fn bucket_list(value: &Value, key: &str) -> Option<BucketList> {
    let raw = value.get(key).filter(|v| v.is_object())?;
    let buckets = match raw.get("buckets") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let key = text_field(item, "key");
                (!key.is_empty()).then(|| FacetBucket {
                    key,
                    doc_count: count_field(item, "doc_count"),
                })
            })
            .collect(),
        _ => Vec::new(),
    };
    Some(BucketList { buckets })
}

fn count_field(value: &Value, key: &str) -> u64 {
    u64::try_from(epoch_field(value, key)).unwrap_or(0)
}

/// One successful search response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub hits: Vec<TrademarkHit>,
    pub aggregations: Aggregations,
}

impl SearchOutcome {
    /// Map a raw `{ "body": { "hits": { "hits": [...] }, "aggregations": {...} } }` payload.
    pub fn from_payload(payload: &Value) -> Result<Self, SearchError> {
        let body = payload
            .get("body")
            .filter(|b| b.is_object())
            .ok_or_else(|| SearchError::Decode("response has no body".to_string()))?;

        let hits = body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .map(|items| items.iter().map(TrademarkHit::from_json).collect())
            .unwrap_or_default();

        let aggregations = body
            .get("aggregations")
            .map(Aggregations::from_json)
            .unwrap_or_default();

        Ok(Self { hits, aggregations })
    }
}
