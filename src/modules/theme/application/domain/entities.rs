use serde::{Deserialize, Serialize};

use super::options::{
    find, resolve, ThemeOption, BACKGROUND_OPTIONS, DEFAULT_BACKGROUND, DEFAULT_FONT,
    DEFAULT_TEXT, FONT_OPTIONS, TEXT_OPTIONS,
};

/// Style variables a custom theme writes on the document root.
pub const CUSTOM_STYLE_VARIABLES: [&str; 7] = [
    "--page-bg",
    "--card-bg",
    "--foot-bg",
    "--page-ink",
    "--ink",
    "--text-main",
    "--font-body",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Light,
    Dark,
    Custom,
}

impl ThemeName {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom => "custom",
        }
    }
}

/// The two fixed themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Light,
    Dark,
}

impl Preset {
    pub fn parse(raw: &str) -> Option<Self> {
        match ThemeName::parse(raw)? {
            ThemeName::Light => Some(Self::Light),
            ThemeName::Dark => Some(Self::Dark),
            ThemeName::Custom => None,
        }
    }
}

impl From<Preset> for ThemeName {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Light => ThemeName::Light,
            Preset::Dark => ThemeName::Dark,
        }
    }
}

/// User-composed background/text/font choice, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    #[serde(default)]
    pub bg_key: String,
    #[serde(default)]
    pub text_key: String,
    #[serde(default)]
    pub font_key: String,
}

impl Default for CustomTheme {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, DEFAULT_TEXT, DEFAULT_FONT)
    }
}

impl CustomTheme {
    pub fn new(bg_key: &str, text_key: &str, font_key: &str) -> Self {
        Self {
            bg_key: bg_key.to_string(),
            text_key: text_key.to_string(),
            font_key: font_key.to_string(),
        }
    }

    pub fn resolve(&self) -> ResolvedTheme {
        ResolvedTheme {
            background: resolve(&BACKGROUND_OPTIONS, &self.bg_key, DEFAULT_BACKGROUND),
            text: resolve(&TEXT_OPTIONS, &self.text_key, DEFAULT_TEXT),
            font: resolve(&FONT_OPTIONS, &self.font_key, DEFAULT_FONT),
        }
    }

    /// Copies each key from `other` that names a real option. Unknown keys
    /// leave the current choice alone, like a `<select>` given a bad value.
    pub fn merge_known(&mut self, other: &CustomTheme) {
        if find(&BACKGROUND_OPTIONS, &other.bg_key).is_some() {
            self.bg_key = other.bg_key.clone();
        }
        if find(&TEXT_OPTIONS, &other.text_key).is_some() {
            self.text_key = other.text_key.clone();
        }
        if find(&FONT_OPTIONS, &other.font_key).is_some() {
            self.font_key = other.font_key.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub background: &'static ThemeOption,
    pub text: &'static ThemeOption,
    pub font: &'static ThemeOption,
}

impl ResolvedTheme {
    /// `(variable, value)` pairs in [`CUSTOM_STYLE_VARIABLES`] order.
    pub fn style_variables(&self) -> [(&'static str, &'static str); 7] {
        [
            ("--page-bg", self.background.value),
            ("--card-bg", self.background.value),
            ("--foot-bg", self.background.value),
            ("--page-ink", self.text.value),
            ("--ink", self.text.value),
            ("--text-main", self.text.value),
            ("--font-body", self.font.value),
        ]
    }
}
