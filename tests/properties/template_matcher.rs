//! Property tests for template file naming.

use proptest::prelude::*;

use formpack::domain::value_objects::TemplateMatcher;

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a suppressed file name never yields a template.
    #[test]
    fn property_suppressed_names_never_match(
        before in file_stem(),
        after in file_stem(),
        suffix in file_stem(),
    ) {
        let matcher = TemplateMatcher::default();
        let file_name = format!("{before}#{after}.form{suffix}");
        prop_assert!(!matcher.matches_name(&file_name));
        prop_assert_eq!(matcher.template_name(&file_name), None);
    }

    /// PROPERTY: the name is everything before the first marker.
    #[test]
    fn property_name_is_prefix_before_first_marker(
        stem in file_stem(),
        suffix in file_stem(),
    ) {
        let matcher = TemplateMatcher::default();
        let file_name = format!("{stem}.form{suffix}");

        match matcher.template_name(&file_name) {
            Some(name) => {
                prop_assert!(file_name.starts_with(&name));
                prop_assert!(!name.contains(".form"));
                prop_assert!(file_name[name.len()..].starts_with(".form"));
            }
            None => prop_assert!(stem.split(".form").next().unwrap_or_default().is_empty()),
        }
    }

    /// PROPERTY: names without the marker never match.
    #[test]
    fn property_names_without_marker_never_match(name in "[A-Za-z0-9_-]{0,30}") {
        let matcher = TemplateMatcher::default();
        prop_assert!(!matcher.matches_name(&name));
    }
}
