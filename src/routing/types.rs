use crate::model::Contact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identifiant fort de session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Mode de routage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    #[default]
    Auto,
    Manual,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

impl FromStr for RoutingMode {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            other => Err(RoutingError::UnknownMode(other.to_string())),
        }
    }
}

/// État de routage : mode courant et contact épinglé (email, vide = aucun).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutingState {
    pub mode: RoutingMode,
    #[serde(default)]
    pub manual_key: String,
}

impl RoutingState {
    pub fn manual<S: Into<String>>(key: S) -> Self {
        Self {
            mode: RoutingMode::Manual,
            manual_key: key.into(),
        }
    }
}

/// Résultat d'une évaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub active: Option<Contact>,
    pub changed: bool,
}

impl SelectionResult {
    /// Email de la cible, `""` si aucune.
    pub fn email(&self) -> &str {
        self.active.as_ref().map_or("", |c| c.email.as_str())
    }

    /// Nom de la cible, `""` si aucune.
    pub fn name(&self) -> &str {
        self.active.as_ref().map_or("", |c| c.name.as_str())
    }
}

/// Statut d'un contact pour l'affichage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactStatus<'a> {
    pub contact: &'a Contact,
    pub on_shift: bool,
    pub selected: bool,
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("unknown routing mode: {0}")]
    UnknownMode(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument for command {0}")]
    MissingArgument(&'static str),
    #[error("invalid hour: {0}")]
    InvalidHour(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
