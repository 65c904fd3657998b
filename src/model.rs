use serde::{Deserialize, Serialize};
use std::fmt;

/// Pictogramme associé à un contact.
///
/// Les tags inconnus sont conservés tels quels ; c'est l'affichage qui
/// retombe sur [`IconKind::User`] via [`IconKind::resolved`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKind {
    Moon,
    Sun,
    Sunset,
    User,
    Other(String),
}

impl IconKind {
    pub fn from_tag<S: AsRef<str>>(tag: S) -> Self {
        match tag.as_ref() {
            "moon" => Self::Moon,
            "sun" => Self::Sun,
            "sunset" => Self::Sunset,
            "user" => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::Sunset => "sunset",
            Self::User => "user",
            Self::Other(tag) => tag,
        }
    }

    /// Pictogramme effectivement affichable.
    pub fn resolved(&self) -> IconKind {
        match self {
            Self::Other(_) => Self::User,
            known => known.clone(),
        }
    }
}

impl Default for IconKind {
    fn default() -> Self {
        Self::User
    }
}

impl From<String> for IconKind {
    fn from(tag: String) -> Self {
        Self::from_tag(tag)
    }
}

impl From<IconKind> for String {
    fn from(icon: IconKind) -> Self {
        icon.as_tag().to_owned()
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Contact joignable, identifié par son email.
///
/// Les heures de créneau ne sont pas bornées : une valeur hors `[0, 24)`
/// issue du parsing est gardée telle quelle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub role: String,
    pub shift_start: i32,
    pub shift_end: i32,
    #[serde(default)]
    pub icon: IconKind,
}

impl Contact {
    pub fn new<N, E, R>(name: N, email: E, role: R, shift_start: i32, shift_end: i32) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            shift_start,
            shift_end,
            icon: IconKind::User,
        }
    }

    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    /// Libellé du créneau, ex. `22:00-6:00`.
    pub fn shift_label(&self) -> String {
        format!("{}:00-{}:00", self.shift_start, self.shift_end)
    }
}

/// Jeu de contacts de démonstration (nuit, matin, après-midi).
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact::new(
            "Alex Rivera",
            "a.rivera@industrial.com",
            "Night Supervisor",
            22,
            6,
        )
        .with_icon(IconKind::Moon),
        Contact::new(
            "Sarah Jenkins",
            "s.jenkins@industrial.com",
            "Morning Lead",
            6,
            14,
        )
        .with_icon(IconKind::Sun),
        Contact::new(
            "Mark Thompson",
            "m.thompson@industrial.com",
            "Afternoon Lead",
            14,
            22,
        )
        .with_icon(IconKind::Sunset),
    ]
}
