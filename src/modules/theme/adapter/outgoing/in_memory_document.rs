use std::collections::BTreeMap;

use crate::modules::theme::application::ports::outgoing::DocumentRoot;

/// Document root held in memory; what a headless host renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryDocumentRoot {
    theme: Option<String>,
    style: BTreeMap<String, String>,
}

impl InMemoryDocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    /// The root's inline `style` attribute text.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DocumentRoot for InMemoryDocumentRoot {
    fn set_theme_attribute(&mut self, theme: &str) {
        self.theme = Some(theme.to_string());
    }

    fn theme_attribute(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    fn remove_style_property(&mut self, name: &str) {
        self.style.remove(name);
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.style.get(name).cloned()
    }
}
