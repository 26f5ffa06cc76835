//! Template registry entity
//!
//! Maps template name to its most recently compiled form. Owned by the
//! rebuild pipeline for the lifetime of the process and never persisted.

use std::collections::BTreeMap;

use super::template::CompiledTemplate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, CompiledTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for the template's name.
    ///
    /// Returns the previous compiled form, if any.
    pub fn upsert(&mut self, template: CompiledTemplate) -> Option<CompiledTemplate> {
        self.templates.insert(template.name().to_string(), template)
    }

    pub fn get(&self, name: &str) -> Option<&CompiledTemplate> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Drops every entry whose name `keep` rejects; returns the dropped names.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let removed: Vec<String> = self
            .templates
            .keys()
            .filter(|name| !keep(name))
            .cloned()
            .collect();
        for name in &removed {
            self.templates.remove(name);
        }
        removed
    }

    /// Compiled templates in name order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
