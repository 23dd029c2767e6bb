use tracing::debug;

use super::domain::attributes::{CardAttribute, CardAttributes};
use super::domain::view::CardView;

/// Where a card is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLifecycle {
    /// Constructed, not yet part of a page. Attribute changes are stored only.
    Unattached,
    /// Part of a page, first render pending.
    Attached,
    /// Part of a page with a current view. Every change re-renders.
    Rendered,
}

/// A reusable, attribute-configured project card.
///
/// Each instance owns its attributes and rendered view; changing one card
/// never touches another.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    attributes: CardAttributes,
    lifecycle: CardLifecycle,
    view: Option<CardView>,
    renders: u32,
}

impl Default for ProjectCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectCard {
    pub fn new() -> Self {
        Self::with_attributes(CardAttributes::default())
    }

    pub fn with_attributes(attributes: CardAttributes) -> Self {
        Self {
            attributes,
            lifecycle: CardLifecycle::Unattached,
            view: None,
            renders: 0,
        }
    }

    pub fn lifecycle(&self) -> CardLifecycle {
        self.lifecycle
    }

    pub fn attributes(&self) -> &CardAttributes {
        &self.attributes
    }

    pub fn view(&self) -> Option<&CardView> {
        self.view.as_ref()
    }

    pub fn render_count(&self) -> u32 {
        self.renders
    }

    /// Inserts the card into a page and renders it.
    pub fn attach(&mut self) -> &CardView {
        if self.lifecycle == CardLifecycle::Unattached {
            self.lifecycle = CardLifecycle::Attached;
        }
        self.render()
    }

    /// Removes the card from its page. The last view is kept.
    pub fn detach(&mut self) {
        self.lifecycle = CardLifecycle::Unattached;
    }

    /// Sets an attribute by name. Returns `false` for names the card does not
    /// observe, which are ignored.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let Some(attr) = CardAttribute::parse(name) else {
            debug!(name, "Ignoring unobserved card attribute");
            return false;
        };
        self.attributes.set(attr, value);
        self.changed();
        true
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let Some(attr) = CardAttribute::parse(name) else {
            return false;
        };
        self.attributes.remove(attr);
        self.changed();
        true
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        CardAttribute::parse(name).and_then(|attr| self.attributes.get(attr))
    }

    /// Typed property setter for the tag list.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.attributes.tags = tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self.changed();
    }

    pub fn to_html(&self) -> String {
        let pairs = self
            .attributes
            .to_pairs()
            .into_iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, crate::shared::html::escape(&value)))
            .collect::<String>();

        let body = self
            .view
            .as_ref()
            .map(CardView::to_html)
            .unwrap_or_default();

        format!("<project-card{}>{}</project-card>", pairs, body)
    }

    fn changed(&mut self) {
        if self.lifecycle != CardLifecycle::Unattached {
            self.render();
        }
    }

    fn render(&mut self) -> &CardView {
        self.renders += 1;
        self.lifecycle = CardLifecycle::Rendered;
        self.view.insert(CardView::from_attributes(&self.attributes))
    }
}
