use ratatui::style::Color;

/// The five selectable color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKey {
    #[default]
    Default,
    Sunset,
    Forest,
    Ocean,
    Monochrome,
}

impl ThemeKey {
    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::Default => "Default",
            ThemeKey::Sunset => "Sunset",
            ThemeKey::Forest => "Forest",
            ThemeKey::Ocean => "Ocean",
            ThemeKey::Monochrome => "Monochrome",
        }
    }

    /// Next theme in selector order, wrapping at the end.
    pub fn next(self) -> ThemeKey {
        match self {
            ThemeKey::Default => ThemeKey::Sunset,
            ThemeKey::Sunset => ThemeKey::Forest,
            ThemeKey::Forest => ThemeKey::Ocean,
            ThemeKey::Ocean => ThemeKey::Monochrome,
            ThemeKey::Monochrome => ThemeKey::Default,
        }
    }

    /// Previous theme in selector order, wrapping at the start.
    pub fn prev(self) -> ThemeKey {
        match self {
            ThemeKey::Default => ThemeKey::Monochrome,
            ThemeKey::Sunset => ThemeKey::Default,
            ThemeKey::Forest => ThemeKey::Sunset,
            ThemeKey::Ocean => ThemeKey::Forest,
            ThemeKey::Monochrome => ThemeKey::Ocean,
        }
    }

    /// Resolve this theme to concrete colors for one mode.
    ///
    /// Only the backdrop and ring vary per theme; the panel chrome is
    /// shared so the clock stays readable on every combination.
    pub fn palette(self, dark: bool) -> Palette {
        let (background, ring) = match (self, dark) {
            (ThemeKey::Default, false) => (Color::Rgb(219, 234, 254), Color::Rgb(59, 130, 246)),
            (ThemeKey::Default, true) => (Color::Rgb(30, 58, 138), Color::Rgb(96, 165, 250)),
            (ThemeKey::Sunset, false) => (Color::Rgb(255, 237, 213), Color::Rgb(249, 115, 22)),
            (ThemeKey::Sunset, true) => (Color::Rgb(124, 45, 18), Color::Rgb(251, 146, 60)),
            (ThemeKey::Forest, false) => (Color::Rgb(220, 252, 231), Color::Rgb(34, 197, 94)),
            (ThemeKey::Forest, true) => (Color::Rgb(20, 83, 45), Color::Rgb(74, 222, 128)),
            (ThemeKey::Ocean, false) => (Color::Rgb(207, 250, 254), Color::Rgb(6, 182, 212)),
            (ThemeKey::Ocean, true) => (Color::Rgb(22, 78, 99), Color::Rgb(34, 211, 238)),
            (ThemeKey::Monochrome, false) => (Color::Rgb(243, 244, 246), Color::Rgb(75, 85, 99)),
            (ThemeKey::Monochrome, true) => (Color::Rgb(17, 24, 39), Color::Rgb(156, 163, 175)),
        };

        if dark {
            Palette {
                background,
                panel: Color::Rgb(31, 41, 55),
                ring,
                track: Color::Rgb(55, 65, 81),
                text: Color::Rgb(255, 255, 255),
                muted: Color::Rgb(209, 213, 219),
            }
        } else {
            Palette {
                background,
                panel: Color::Rgb(255, 255, 255),
                ring,
                track: Color::Rgb(229, 231, 235),
                text: Color::Rgb(31, 41, 55),
                muted: Color::Rgb(75, 85, 99),
            }
        }
    }
}

/// Concrete colors for one theme in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen backdrop behind the panel.
    pub background: Color,
    /// Card surface the clock sits on.
    pub panel: Color,
    /// Filled part of the progress ring.
    pub ring: Color,
    /// Unfilled part of the progress ring.
    pub track: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text and hints.
    pub muted: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_in_both_directions() {
        let mut key = ThemeKey::Default;
        for _ in 0..5 {
            key = key.next();
        }
        assert_eq!(key, ThemeKey::Default);
        assert_eq!(ThemeKey::Default.prev(), ThemeKey::Monochrome);
        assert_eq!(ThemeKey::Monochrome.next(), ThemeKey::Default);
    }

    #[test]
    fn prev_undoes_next() {
        for key in [
            ThemeKey::Default,
            ThemeKey::Sunset,
            ThemeKey::Forest,
            ThemeKey::Ocean,
            ThemeKey::Monochrome,
        ] {
            assert_eq!(key.next().prev(), key);
        }
    }

    #[test]
    fn dark_mode_changes_every_palette() {
        for key in [
            ThemeKey::Default,
            ThemeKey::Sunset,
            ThemeKey::Forest,
            ThemeKey::Ocean,
            ThemeKey::Monochrome,
        ] {
            assert_ne!(key.palette(false), key.palette(true));
        }
    }

    #[test]
    fn panel_chrome_is_shared_across_themes() {
        // Switching themes must not change text contrast, only accents
        let sunset = ThemeKey::Sunset.palette(true);
        let ocean = ThemeKey::Ocean.palette(true);
        assert_eq!(sunset.panel, ocean.panel);
        assert_eq!(sunset.text, ocean.text);
        assert_eq!(sunset.track, ocean.track);
        assert_ne!(sunset.ring, ocean.ring);
    }
}
