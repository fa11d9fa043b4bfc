#[cfg(test)]
mod tests {
    use super::super::filter::*;
    use super::super::models::FacetDisplayPolicy;
    use crate::schemas::FacetBucket;

    fn create_buckets(keys: &[&str]) -> Vec<FacetBucket> {
        keys.iter()
            .enumerate()
            .map(|(i, key)| FacetBucket {
                key: key.to_string(),
                doc_count: (i + 1) as u64,
            })
            .collect()
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let buckets = create_buckets(&["Disney", "Marvel", "Pixar"]);

        let visible =
            FacetFilter::visible_buckets(&buckets, "", &[], FacetDisplayPolicy::SelectedOnly);

        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_text_is_case_insensitive_substring() {
        let buckets = create_buckets(&["Disney Enterprises", "Marvel", "DISNEY LLC"]);

        let visible =
            FacetFilter::visible_buckets(&buckets, "disn", &[], FacetDisplayPolicy::Highlight);

        assert_eq!(visible, vec![0, 2]);
    }

    #[test]
    fn test_selected_only_restricts_to_selection() {
        let buckets = create_buckets(&["Disney", "Marvel", "Pixar"]);
        let selected = vec!["Pixar".to_string()];

        let visible = FacetFilter::visible_buckets(
            &buckets,
            "",
            &selected,
            FacetDisplayPolicy::SelectedOnly,
        );

        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_highlight_keeps_unselected() {
        let buckets = create_buckets(&["Disney", "Marvel", "Pixar"]);
        let selected = vec!["Pixar".to_string()];

        let visible =
            FacetFilter::visible_buckets(&buckets, "", &selected, FacetDisplayPolicy::Highlight);

        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_selected_only_combines_with_filter_text() {
        let buckets = create_buckets(&["Disney", "Marvel", "Pixar"]);
        let selected = vec!["Pixar".to_string(), "Marvel".to_string()];

        let visible = FacetFilter::visible_buckets(
            &buckets,
            "mar",
            &selected,
            FacetDisplayPolicy::SelectedOnly,
        );

        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_selection_absent_from_buckets_hides_all() {
        let buckets = create_buckets(&["Disney"]);
        let selected = vec!["Gone".to_string()];

        let visible = FacetFilter::visible_buckets(
            &buckets,
            "",
            &selected,
            FacetDisplayPolicy::SelectedOnly,
        );

        assert!(visible.is_empty());
    }
}
