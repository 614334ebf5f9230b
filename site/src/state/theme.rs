#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preference {
    Dark,
    #[default]
    Light,
}

impl Preference {
    /// Parse a persisted value. Anything but `"dark"` or `"light"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Initial preference at page load.
    ///
    /// A persisted choice wins over the operating system's color scheme,
    /// which wins over the light default.
    #[must_use]
    pub fn resolve(persisted: Option<&str>, os_prefers_dark: bool) -> Self {
        match persisted.and_then(Self::parse) {
            Some(choice) => choice,
            None if os_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    /// Preference matching the presence of the dark marker.
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
