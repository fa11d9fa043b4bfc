#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::default(), DisplayMode::List);
        assert_eq!(DisplayMode::List.toggle(), DisplayMode::Grid);
        assert_eq!(DisplayMode::Grid.toggle(), DisplayMode::List);
        assert_eq!(DisplayMode::Grid.label(), "Grid View");
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::SearchInput;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::SearchInput);
        assert_eq!(seen.len(), 5);
        assert_eq!(Focus::SearchInput.prev(), Focus::FacetFilter);
    }

    #[test]
    fn test_text_input_focus() {
        assert!(Focus::SearchInput.is_text_input());
        assert!(Focus::FacetFilter.is_text_input());
        assert!(!Focus::Results.is_text_input());
        assert!(!Focus::Facets.is_text_input());
        assert!(!Focus::StatusFilter.is_text_input());
    }

    #[test]
    fn test_ui_config_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.facet_policy, FacetDisplayPolicy::SelectedOnly);
        assert_eq!(config.display_mode, DisplayMode::List);
    }
}
