#[cfg(test)]
mod tests {
    use super::super::filters::*;

    #[test]
    fn test_status_params() {
        assert_eq!(StatusFilter::All.as_param(), "");
        assert_eq!(StatusFilter::Registered.as_param(), "registered");
        assert_eq!(StatusFilter::Pending.as_param(), "pending");
        assert_eq!(StatusFilter::Abandoned.as_param(), "abandoned");
        assert_eq!(StatusFilter::Others.as_param(), "others");
    }

    #[test]
    fn test_status_from_param_is_lenient() {
        assert_eq!(StatusFilter::from_param(""), StatusFilter::All);
        assert_eq!(StatusFilter::from_param("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::from_param("PENDING"), StatusFilter::Pending);
        assert_eq!(StatusFilter::from_param("expired"), StatusFilter::All);
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "registered".parse::<StatusFilter>(),
            Ok(StatusFilter::Registered)
        );
        assert!("expired".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_cycle() {
        let mut status = StatusFilter::All;
        for _ in 0..StatusFilter::ALL.len() {
            status = status.next();
        }
        assert_eq!(status, StatusFilter::All);

        assert_eq!(StatusFilter::All.prev(), StatusFilter::Others);
        assert_eq!(StatusFilter::Registered.prev(), StatusFilter::All);
        assert_eq!(StatusFilter::All.next(), StatusFilter::Registered);
    }

    #[test]
    fn test_status_request_list() {
        assert!(StatusFilter::All.to_request_list().is_empty());
        assert_eq!(
            StatusFilter::Abandoned.to_request_list(),
            vec!["abandoned".to_string()]
        );
    }

    #[test]
    fn test_facet_category_mapping() {
        assert_eq!(FacetCategory::Owners.label(), "Owners");
        assert_eq!(FacetCategory::LawFirms.label(), "Law Firms");
        assert_eq!(FacetCategory::Attorneys.label(), "Attorneys");

        assert_eq!(FacetCategory::Owners.key(), "owners");
        assert_eq!(FacetCategory::LawFirms.key(), "law_firms");
        assert_eq!(FacetCategory::Attorneys.key(), "attorneys");

        assert_eq!(FacetCategory::Owners.aggregation_key(), "current_owners");
        assert_eq!(FacetCategory::LawFirms.aggregation_key(), "law_firms");
        assert_eq!(FacetCategory::Attorneys.aggregation_key(), "attorneys");
    }

    #[test]
    fn test_facet_category_cycle() {
        assert_eq!(FacetCategory::Owners.next(), FacetCategory::LawFirms);
        assert_eq!(FacetCategory::Attorneys.next(), FacetCategory::Owners);
        assert_eq!(FacetCategory::Owners.prev(), FacetCategory::Attorneys);
    }

    #[test]
    fn test_selection_toggle_twice_restores() {
        let mut selection = Selection::new();
        let before = selection.clone();

        assert!(selection.toggle(FacetCategory::Owners, "Disney Enterprises, Inc."));
        assert!(selection.contains(FacetCategory::Owners, "Disney Enterprises, Inc."));
        assert!(!selection.contains(FacetCategory::LawFirms, "Disney Enterprises, Inc."));

        assert!(!selection.toggle(FacetCategory::Owners, "Disney Enterprises, Inc."));
        assert_eq!(selection, before);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_keeps_order_without_duplicates() {
        let mut selection = Selection::new();
        selection.toggle(FacetCategory::Attorneys, "b");
        selection.toggle(FacetCategory::Attorneys, "a");
        selection.toggle(FacetCategory::Attorneys, "c");
        selection.toggle(FacetCategory::Attorneys, "a");

        assert_eq!(selection.keys(FacetCategory::Attorneys), ["b", "c"]);
        assert_eq!(selection.count(FacetCategory::Attorneys), 2);
        assert_eq!(selection.count(FacetCategory::Owners), 0);
    }

    #[test]
    fn test_search_params_empty_query() {
        let params = SearchParams::new("", StatusFilter::All, Selection::new());
        assert!(!params.is_searchable());

        let params = SearchParams::new("   ", StatusFilter::All, Selection::new());
        assert!(params.is_searchable());

        let params = SearchParams::new("mickey", StatusFilter::All, Selection::new());
        assert!(params.is_searchable());
    }
}
