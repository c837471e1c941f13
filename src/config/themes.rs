use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_THEME: &str = "mocha";

/// Catppuccin flavor, reduced to the roles the wizard draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub base: Color,
    pub crust: Color,
    pub border: Color,
    pub text: Color,
    pub dim_text: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
}

/// Simple RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a hex color string like "#1e1e2e"
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

pub static THEMES: LazyLock<HashMap<&'static str, Theme>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "mocha",
        Theme {
            name: "Mocha",
            base: Color::from_hex("#1e1e2e"),
            crust: Color::from_hex("#11111b"),
            border: Color::from_hex("#45475a"),
            text: Color::from_hex("#cdd6f4"),
            dim_text: Color::from_hex("#6c7086"),
            accent: Color::from_hex("#cba6f7"),
            success: Color::from_hex("#a6e3a1"),
            warning: Color::from_hex("#f9e2af"),
        },
    );
    m.insert(
        "macchiato",
        Theme {
            name: "Macchiato",
            base: Color::from_hex("#24273a"),
            crust: Color::from_hex("#181926"),
            border: Color::from_hex("#494d64"),
            text: Color::from_hex("#cad3f5"),
            dim_text: Color::from_hex("#6e738d"),
            accent: Color::from_hex("#c6a0f6"),
            success: Color::from_hex("#a6da95"),
            warning: Color::from_hex("#eed49f"),
        },
    );
    m.insert(
        "frappe",
        Theme {
            name: "Frappé",
            base: Color::from_hex("#303446"),
            crust: Color::from_hex("#232634"),
            border: Color::from_hex("#51576d"),
            text: Color::from_hex("#c6d0f5"),
            dim_text: Color::from_hex("#737994"),
            accent: Color::from_hex("#ca9ee6"),
            success: Color::from_hex("#a6d189"),
            warning: Color::from_hex("#e5c890"),
        },
    );
    m.insert(
        "latte",
        Theme {
            name: "Latte",
            base: Color::from_hex("#eff1f5"),
            crust: Color::from_hex("#dce0e8"),
            border: Color::from_hex("#bcc0cc"),
            text: Color::from_hex("#4c4f69"),
            dim_text: Color::from_hex("#9ca0b0"),
            accent: Color::from_hex("#8839ef"),
            success: Color::from_hex("#40a02b"),
            warning: Color::from_hex("#df8e1d"),
        },
    );
    m
});

pub fn get_theme(name: &str) -> &'static Theme {
    THEMES
        .get(name)
        .unwrap_or_else(|| &THEMES[DEFAULT_THEME])
}

pub fn is_known_theme(name: &str) -> bool {
    THEMES.contains_key(name)
}

pub fn theme_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = THEMES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[test]
    fn hex_color_parsing() {
        let c = Color::from_hex("#1e1e2e");
        assert_eq!(c.r, 0x1e);
        assert_eq!(c.g, 0x1e);
        assert_eq!(c.b, 0x2e);
    }

    #[test]
    fn malformed_hex_is_black() {
        assert_eq!(Color::from_hex("#12"), rgb(0x12, 0, 0));
        assert_eq!(Color::from_hex("zzzzzz"), rgb(0, 0, 0));
    }

    #[test]
    fn mauve_parses() {
        assert_eq!(Color::from_hex("#cba6f7"), rgb(203, 166, 247));
    }

    #[test]
    fn converts_to_ratatui_rgb() {
        let c: ratatui::style::Color = rgb(1, 2, 3).into();
        assert_eq!(c, ratatui::style::Color::Rgb(1, 2, 3));
    }

    #[test]
    fn all_flavors_exist() {
        assert_eq!(theme_names(), vec!["frappe", "latte", "macchiato", "mocha"]);
    }

    #[test]
    fn get_theme_fallback() {
        assert_eq!(get_theme("nonexistent").name, "Mocha");
        assert!(!is_known_theme("nonexistent"));
        assert_eq!(get_theme("latte").name, "Latte");
    }
}
