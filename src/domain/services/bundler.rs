//! Bundler service
//!
//! Combines every compiled template in a registry snapshot into the single
//! bundle text the browser loads.

use crate::domain::entities::TemplateRegistry;
use crate::domain::value_objects::Separator;

/// Aggregates compiled templates into one bundle
///
/// Output is deterministic for a given registry: templates appear in name
/// order, each followed by the separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundler {
    separator: Separator,
}

impl Bundler {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    pub fn bundle(&self, registry: &TemplateRegistry) -> String {
        let sep = self.separator.as_str();
        let capacity = registry
            .iter()
            .map(|t| t.renderable().len() + sep.len())
            .sum();
        let mut out = String::with_capacity(capacity);
        for template in registry.iter() {
            out.push_str(template.renderable());
            out.push_str(sep);
        }
        out
    }
}
