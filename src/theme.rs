pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Sun while dark (switch to light), moon while light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Durable key-value slot holding the theme name.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Stored value wins; otherwise a light system preference picks light, and
/// everything else falls back to dark.
pub fn initial_theme<S: ThemeStore>(store: &S, prefers_light: bool) -> Theme {
    if let Some(theme) = store.load().as_deref().and_then(Theme::parse) {
        return theme;
    }

    if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Single writer of the theme flag. Every change is written through.
pub struct ThemeSwitch<S: ThemeStore> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeSwitch<S> {
    pub fn new(store: S, prefers_light: bool) -> Self {
        let current = initial_theme(&store, prefers_light);
        store.save(current.as_str());
        Self { current, store }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }
}
