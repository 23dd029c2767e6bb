use tracing::{debug, info, warn};

use crate::modules::theme::application::domain::entities::{
    CustomTheme, Preset, ThemeName, CUSTOM_STYLE_VARIABLES,
};
use crate::modules::theme::application::ports::outgoing::{
    ColorSchemePreference, DocumentRoot, ViewTransitions, CUSTOM_THEME_KEY, THEME_KEY,
};
use crate::shared::storage::{read_or_none, KeyValueStore};

/// Popover with the two presets, three custom selectors and an apply button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePanel {
    open: bool,
    selection: CustomTheme,
}

impl ThemePanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the toggle button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// What the three selectors currently show.
    pub fn selection(&self) -> &CustomTheme {
        &self.selection
    }
}

/// Theme state for one page load.
///
/// Holds the active theme and the popover; storage, the document root and
/// transition support are injected so several instances can coexist in tests.
pub struct ThemeService<S, D, T>
where
    S: KeyValueStore,
    D: DocumentRoot,
    T: ViewTransitions,
{
    store: S,
    document: D,
    transitions: T,
    active: ThemeName,
    panel: ThemePanel,
}

impl<S, D, T> ThemeService<S, D, T>
where
    S: KeyValueStore,
    D: DocumentRoot,
    T: ViewTransitions,
{
    /// Page-load initialisation: stored theme, else the environment's
    /// preference; a stored custom theme is re-applied from its triple.
    pub fn init(
        store: S,
        document: D,
        transitions: T,
        preference: &dyn ColorSchemePreference,
    ) -> Self {
        let stored = read_or_none(&store, THEME_KEY).and_then(|raw| ThemeName::parse(&raw));
        let theme = stored.unwrap_or(if preference.prefers_dark() {
            ThemeName::Dark
        } else {
            ThemeName::Light
        });
        debug!(theme = theme.as_str(), from_storage = stored.is_some(), "Initialising theme");

        let mut service = Self {
            store,
            document,
            transitions,
            active: theme,
            panel: ThemePanel::default(),
        };

        Self::write_base(&service.store, &mut service.document, theme);
        if theme == ThemeName::Custom {
            service.restore_custom();
        }
        service.restore_selection();

        service
    }

    pub fn active(&self) -> ThemeName {
        self.active
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn panel(&self) -> &ThemePanel {
        &self.panel
    }

    /// The last custom triple, kept even while a preset is active.
    pub fn stored_custom(&self) -> Option<CustomTheme> {
        read_or_none(&self.store, CUSTOM_THEME_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn select_preset(&mut self, preset: Preset) {
        let theme = ThemeName::from(preset);
        let Self {
            store,
            document,
            transitions,
            active,
            ..
        } = self;

        Self::transition(transitions, &mut || {
            Self::write_base(store, document, theme);
            for name in CUSTOM_STYLE_VARIABLES {
                document.remove_style_property(name);
            }
            *active = theme;
        });

        info!(theme = theme.as_str(), "Applied preset theme");
        self.panel.open = false;
    }

    pub fn apply_custom(&mut self, custom: CustomTheme) {
        let Self {
            store,
            document,
            transitions,
            active,
            ..
        } = self;

        Self::transition(transitions, &mut || {
            Self::write_custom(store, document, &custom);
            *active = ThemeName::Custom;
        });

        info!(
            bg = %custom.bg_key,
            text = %custom.text_key,
            font = %custom.font_key,
            "Applied custom theme"
        );
        self.panel.selection.merge_known(&custom);
        self.panel.open = false;
    }

    /// "Apply custom" button: applies what the selectors show.
    pub fn apply_selected_custom(&mut self) {
        let selection = self.panel.selection.clone();
        self.apply_custom(selection);
    }

    /// User changed the selectors without applying yet.
    pub fn choose(&mut self, selection: &CustomTheme) {
        self.panel.selection.merge_known(selection);
    }

    /// Toggle button click. Opening refreshes the selectors from the stored
    /// custom triple. Returns whether the panel is now open.
    pub fn toggle_panel(&mut self) -> bool {
        let will_open = !self.panel.open;
        if will_open {
            self.restore_selection();
        }
        self.panel.open = will_open;
        will_open
    }

    /// Click anywhere outside the panel and its toggle button.
    pub fn click_outside(&mut self) {
        if self.panel.open {
            self.panel.open = false;
        }
    }

    /// Clicks on the panel itself or its toggle button leave it as it is.
    pub fn click_inside(&mut self) {}

    fn restore_custom(&mut self) {
        let Some(raw) = read_or_none(&self.store, CUSTOM_THEME_KEY) else {
            return;
        };

        match serde_json::from_str::<CustomTheme>(&raw) {
            Ok(custom) => Self::write_custom(&self.store, &mut self.document, &custom),
            Err(e) => {
                warn!(error = %e, "Stored custom theme is unreadable, using light");
                Self::write_base(&self.store, &mut self.document, ThemeName::Light);
                self.active = ThemeName::Light;
            }
        }
    }

    fn restore_selection(&mut self) {
        if let Some(custom) = self.stored_custom() {
            self.panel.selection.merge_known(&custom);
        }
    }

    /// Wraps `change` in a view transition when the host has them.
    fn transition(transitions: &T, change: &mut dyn FnMut()) {
        if transitions.is_supported() {
            transitions.run(change);
        } else {
            change();
        }
    }

    fn persist(store: &S, key: &str, value: &str) {
        if let Err(e) = store.set_item(key, value) {
            warn!(key, error = %e, "Could not persist theme setting");
        }
    }

    fn write_base(store: &S, document: &mut D, theme: ThemeName) {
        document.set_theme_attribute(theme.as_str());
        Self::persist(store, THEME_KEY, theme.as_str());
    }

    fn write_custom(store: &S, document: &mut D, custom: &CustomTheme) {
        let resolved = custom.resolve();

        document.set_theme_attribute(ThemeName::Custom.as_str());
        Self::persist(store, THEME_KEY, ThemeName::Custom.as_str());
        match serde_json::to_string(custom) {
            Ok(raw) => Self::persist(store, CUSTOM_THEME_KEY, &raw),
            Err(e) => warn!(error = %e, "Could not encode custom theme"),
        }

        for (name, value) in resolved.style_variables() {
            document.set_style_property(name, value);
        }
    }
}
