use crate::interactive_ratatui::domain::models::FacetDisplayPolicy;
use crate::schemas::FacetBucket;

pub struct FacetFilter;

impl FacetFilter {
    /// Indices of the buckets to list for one category.
    ///
    /// Keys must contain `filter_text` (case-insensitive). Under
    /// `SelectedOnly`, a non-empty `selected` further restricts the list to
    /// those keys.
    pub fn visible_buckets(
        buckets: &[FacetBucket],
        filter_text: &str,
        selected: &[String],
        policy: FacetDisplayPolicy,
    ) -> Vec<usize> {
        let needle = filter_text.to_lowercase();
        let restrict_to_selected =
            policy == FacetDisplayPolicy::SelectedOnly && !selected.is_empty();

        buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| {
                if restrict_to_selected && !selected.iter().any(|k| *k == bucket.key) {
                    return false;
                }

                needle.is_empty() || bucket.key.to_lowercase().contains(&needle)
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}
