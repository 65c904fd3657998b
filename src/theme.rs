use serde::{Deserialize, Serialize};
use std::fmt;

/// Première heure du thème clair en mode auto.
pub const LIGHT_FROM: i32 = 7;
/// Première heure du thème sombre en mode auto.
pub const DARK_FROM: i32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Thème automatique (selon l'heure) ou forcé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub manual: bool,
    pub manual_theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            manual: false,
            manual_theme: Theme::Dark,
        }
    }
}

impl ThemeState {
    /// Passe en mode forcé et inverse le thème forcé.
    pub fn toggle_manual(&mut self) {
        self.manual = true;
        self.manual_theme = self.manual_theme.flipped();
    }

    pub fn active(&self, hour: i32) -> Theme {
        if self.manual {
            self.manual_theme
        } else if (LIGHT_FROM..DARK_FROM).contains(&hour) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}
