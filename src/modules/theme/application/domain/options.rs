/// One entry of a custom-theme option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub static BACKGROUND_OPTIONS: [ThemeOption; 3] = [
    ThemeOption {
        key: "light",
        label: "Light",
        value: "#f3f4f6",
    },
    ThemeOption {
        key: "cozy",
        label: "Cozy",
        value: "#fef3c7",
    },
    ThemeOption {
        key: "dark",
        label: "Dark",
        value: "#020617",
    },
];

pub static TEXT_OPTIONS: [ThemeOption; 3] = [
    ThemeOption {
        key: "dark",
        label: "Dark",
        value: "#111827",
    },
    ThemeOption {
        key: "soft",
        label: "Soft",
        value: "#4b5563",
    },
    ThemeOption {
        key: "light",
        label: "Light",
        value: "#e5e7eb",
    },
];

pub static FONT_OPTIONS: [ThemeOption; 3] = [
    ThemeOption {
        key: "modern",
        label: "Modern Sans",
        value: r#"system-ui, -apple-system, "Segoe UI", Roboto, sans-serif"#,
    },
    ThemeOption {
        key: "rounded",
        label: "Rounded",
        value: r#""Nunito", "Montserrat", system-ui, sans-serif"#,
    },
    ThemeOption {
        key: "serif",
        label: "Serif",
        value: r#""Georgia", "Times New Roman", serif"#,
    },
];

pub const DEFAULT_BACKGROUND: &str = "light";
pub const DEFAULT_TEXT: &str = "dark";
pub const DEFAULT_FONT: &str = "modern";

pub fn find(options: &'static [ThemeOption], key: &str) -> Option<&'static ThemeOption> {
    options.iter().find(|o| o.key == key)
}

/// Looks `key` up, falling back to the `fallback` entry (or the first one).
pub fn resolve(
    options: &'static [ThemeOption],
    key: &str,
    fallback: &str,
) -> &'static ThemeOption {
    find(options, key)
        .or_else(|| find(options, fallback))
        .unwrap_or(&options[0])
}
