pub const FILTER_CLASS_PREFIX: &str = "filter-";

pub fn filter_class(value: &str) -> String {
    format!("{FILTER_CLASS_PREFIX}{value}")
}

/// How the filter change handler treats classes already present on a figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterClassPolicy {
    /// Drop every class so the figure carries the filter class alone.
    #[default]
    Exclusive,
    /// Swap only `filter-*` classes and keep layout or state classes.
    ScopedReplace,
}

impl FilterClassPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("exclusive") {
            Some(FilterClassPolicy::Exclusive)
        } else if trimmed.eq_ignore_ascii_case("scoped") {
            Some(FilterClassPolicy::ScopedReplace)
        } else {
            None
        }
    }
}

/// Class list a figure should end with after selecting filter `value`.
pub fn project_filter_classes(
    existing: &str,
    value: &str,
    policy: FilterClassPolicy,
) -> Vec<String> {
    let next = filter_class(value);
    let mut classes: Vec<String> = match policy {
        FilterClassPolicy::Exclusive => Vec::new(),
        FilterClassPolicy::ScopedReplace => existing
            .split_whitespace()
            .filter(|class| !class.starts_with(FILTER_CLASS_PREFIX))
            .map(str::to_string)
            .collect(),
    };
    if !classes.contains(&next) {
        classes.push(next);
    }
    classes
}

/// Value to select at page ready, taken from the control's own data attribute.
pub fn initial_select_value(data_attr: Option<&str>) -> Option<String> {
    data_attr.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_leaves_single_class() {
        let classes = project_filter_classes(
            "filter-old masonry-brick",
            "mono",
            FilterClassPolicy::Exclusive,
        );
        assert_eq!(classes, vec!["filter-mono".to_string()]);
    }

    #[test]
    fn default_policy_clears_layout_classes() {
        let classes =
            project_filter_classes("masonry-brick", "vintage", FilterClassPolicy::default());
        assert_eq!(classes, vec!["filter-vintage".to_string()]);
    }

    #[test]
    fn class_is_prefix_and_raw_value() {
        assert_eq!(filter_class("vintage"), "filter-vintage");
        assert_eq!(filter_class(" mono"), "filter- mono");
        assert_eq!(filter_class(""), "filter-");
    }

    #[test]
    fn scoped_keeps_unrelated_classes() {
        let classes = project_filter_classes(
            "filter-old  masonry-brick is-loaded",
            "mono",
            FilterClassPolicy::ScopedReplace,
        );
        assert_eq!(classes, vec!["masonry-brick", "is-loaded", "filter-mono"]);
    }

    #[test]
    fn scoped_on_bare_figure_has_one_class() {
        let classes = project_filter_classes("", "sepia", FilterClassPolicy::ScopedReplace);
        assert_eq!(classes, vec!["filter-sepia"]);
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(
            FilterClassPolicy::parse(" Exclusive "),
            Some(FilterClassPolicy::Exclusive)
        );
        assert_eq!(
            FilterClassPolicy::parse("scoped"),
            Some(FilterClassPolicy::ScopedReplace)
        );
        assert_eq!(FilterClassPolicy::parse("other"), None);
        assert_eq!(FilterClassPolicy::default(), FilterClassPolicy::Exclusive);
    }

    #[test]
    fn initial_value_comes_from_attribute() {
        assert_eq!(initial_select_value(Some("vintage")), Some("vintage".to_string()));
        assert_eq!(initial_select_value(None), None);
    }
}
