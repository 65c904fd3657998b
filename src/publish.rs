use crate::routing::{ContactStatus, SelectionResult};
use serde::Serialize;
use std::io::Write;

/// Nom de l'événement émis vers l'hôte à chaque nouvelle cible.
pub const SELECTION_CHANGED: &str = "SelectionChanged";

/// Propriétés exposées à l'hôte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProperties {
    pub selected_email: String,
    pub target_name: String,
}

impl HostProperties {
    pub fn from_selection(result: &SelectionResult) -> Self {
        Self {
            selected_email: result.email().to_string(),
            target_name: result.name().to_string(),
        }
    }
}

/// Événement destiné à l'hôte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum HostEvent {
    SelectionChanged(String),
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectionChanged(_) => SELECTION_CHANGED,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Self::SelectionChanged(email) => email,
        }
    }
}

/// Événement de changement, uniquement si l'évaluation l'a signalé.
pub fn selection_event(result: &SelectionResult) -> Option<HostEvent> {
    result
        .changed
        .then(|| HostEvent::SelectionChanged(result.email().to_string()))
}

/// Mise à jour à pousser vers l'hôte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostUpdate {
    Property { name: &'static str, value: String },
    Event(HostEvent),
}

/// Miroir des propriétés déjà écrites chez l'hôte : ne renvoie que les écarts.
#[derive(Debug, Clone, Default)]
pub struct HostMirror {
    props: HostProperties,
}

impl HostMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &HostProperties {
        &self.props
    }

    pub fn sync(&mut self, result: &SelectionResult) -> Vec<HostUpdate> {
        let next = HostProperties::from_selection(result);
        let mut out = Vec::new();
        if next.selected_email != self.props.selected_email {
            out.push(HostUpdate::Property {
                name: "selectedEmail",
                value: next.selected_email.clone(),
            });
        }
        if next.target_name != self.props.target_name {
            out.push(HostUpdate::Property {
                name: "targetName",
                value: next.target_name.clone(),
            });
        }
        if let Some(event) = selection_event(result) {
            out.push(HostUpdate::Event(event));
        }
        self.props = next;
        out
    }
}

/// Destination d'une sélection (vue, journal, pont hôte...).
pub trait SelectionSink {
    fn publish(&mut self, hour: i32, result: &SelectionResult) -> anyhow::Result<()>;
}

/// Sortie texte : une ligne par évaluation, ou seulement sur changement.
pub struct TextSink<W: Write> {
    out: W,
    changes_only: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, changes_only: bool) -> Self {
        Self { out, changes_only }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SelectionSink for TextSink<W> {
    fn publish(&mut self, hour: i32, result: &SelectionResult) -> anyhow::Result<()> {
        if self.changes_only && !result.changed {
            return Ok(());
        }
        let marker = if result.changed { " *" } else { "" };
        writeln!(self.out, "{hour:02}h -> {}{marker}", target_label(result))?;
        Ok(())
    }
}

/// `Nom <email>` ou `-` sans cible.
pub fn target_label(result: &SelectionResult) -> String {
    match &result.active {
        Some(c) => format!("{} <{}>", c.name, c.email),
        None => "-".to_string(),
    }
}

/// Ligne d'affichage d'un contact : `[*] ~ Nom (rôle) 22:00-6:00 moon`.
pub fn status_line(status: &ContactStatus<'_>) -> String {
    let c = status.contact;
    format!(
        "[{}] {} {} ({}) {} {}",
        if status.selected { '*' } else { ' ' },
        if status.on_shift { '~' } else { ' ' },
        c.name,
        c.role,
        c.shift_label(),
        c.icon.resolved()
    )
}
