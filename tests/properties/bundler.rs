//! Property tests for bundling.

use std::collections::BTreeMap;

use proptest::prelude::*;

use formpack::domain::entities::{CompiledTemplate, TemplateRegistry};
use formpack::domain::services::Bundler;
use formpack::domain::value_objects::Separator;

fn templates() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z]{1,6}", "[A-Za-z0-9();]{0,20}"), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the bundle holds the last version of each name, in name
    /// order, regardless of insertion order.
    #[test]
    fn property_bundle_is_last_write_per_name_in_name_order(entries in templates()) {
        let mut registry = TemplateRegistry::new();
        let mut expected = BTreeMap::new();
        for (name, text) in &entries {
            registry.upsert(CompiledTemplate::new(name.as_str(), text.as_str()));
            expected.insert(name.clone(), text.clone());
        }

        let bundle = Bundler::new(Separator::Newline).bundle(&registry);

        let want: String = expected.values().map(|text| format!("{text}\n")).collect();
        prop_assert_eq!(bundle, want);
        prop_assert_eq!(registry.len(), expected.len());
    }

    /// PROPERTY: without a separator the bundle is plain concatenation.
    #[test]
    fn property_no_separator_concatenates(entries in templates()) {
        let mut registry = TemplateRegistry::new();
        for (name, text) in &entries {
            registry.upsert(CompiledTemplate::new(name.as_str(), text.as_str()));
        }

        let bundle = Bundler::new(Separator::None).bundle(&registry);

        let want: String = registry.iter().map(|t| t.renderable()).collect();
        prop_assert_eq!(bundle, want);
    }
}
