//! Persisted display theme

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::storage::KeyValueStore;
use crate::{Error, Result};

/// Storage key for the selected theme
pub const THEME_KEY: &str = "@matrix_solver_theme";

/// Available display themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKey {
    #[default]
    Default,
    Amoled,
    Ocean,
    Forest,
    Sunset,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 5] = [
        ThemeKey::Default,
        ThemeKey::Amoled,
        ThemeKey::Ocean,
        ThemeKey::Forest,
        ThemeKey::Sunset,
    ];

    /// Persisted key
    pub const fn key(self) -> &'static str {
        match self {
            ThemeKey::Default => "default",
            ThemeKey::Amoled => "amoled",
            ThemeKey::Ocean => "ocean",
            ThemeKey::Forest => "forest",
            ThemeKey::Sunset => "sunset",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ThemeKey::Default => "Default",
            ThemeKey::Amoled => "AMOLED Dark",
            ThemeKey::Ocean => "Ocean Blue",
            ThemeKey::Forest => "Forest Green",
            ThemeKey::Sunset => "Sunset Orange",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ThemeKey::Default => "Classic dark theme",
            ThemeKey::Amoled => "Pure black for OLED",
            ThemeKey::Ocean => "Deep sea inspired",
            ThemeKey::Forest => "Nature inspired",
            ThemeKey::Sunset => "Warm evening tones",
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeKey::ALL
            .into_iter()
            .find(|theme| s.trim().eq_ignore_ascii_case(theme.key()))
            .ok_or_else(|| Error::Config(format!("unknown theme '{s}'")))
    }
}

/// Theme setting over a key/value store
pub struct Settings<S> {
    store: S,
}

impl<S: KeyValueStore> Settings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Selected theme; missing or unrecognized values read as the default
    pub fn theme(&self) -> ThemeKey {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unknown stored theme");
                ThemeKey::Default
            }),
            Ok(None) => ThemeKey::Default,
            Err(e) => {
                warn!(error = %e, "failed to read theme");
                ThemeKey::Default
            }
        }
    }

    pub fn set_theme(&mut self, theme: ThemeKey) -> Result<()> {
        self.store.set(THEME_KEY, theme.key())?;
        info!(%theme, "theme changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_theme_defaults_and_persists() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new(&mut store);
        assert_eq!(settings.theme(), ThemeKey::Default);

        settings.set_theme(ThemeKey::Ocean).unwrap();
        assert_eq!(settings.theme(), ThemeKey::Ocean);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("ocean"));
    }

    #[test]
    fn test_unknown_stored_theme_reads_default() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(Settings::new(store).theme(), ThemeKey::Default);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("AMOLED".parse::<ThemeKey>().unwrap(), ThemeKey::Amoled);
        assert!("neon".parse::<ThemeKey>().is_err());
        assert_eq!(ThemeKey::Sunset.label(), "Sunset Orange");
        assert_eq!(ThemeKey::Forest.description(), "Nature inspired");
    }
}
