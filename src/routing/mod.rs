mod command;
pub mod select;
pub mod shift;
mod types;

pub use command::Command;
pub use shift::is_on_shift;
pub use types::{ContactStatus, RoutingError, RoutingMode, RoutingState, SelectionResult, SessionId};

use crate::clock::HourSource;
use crate::io;
use crate::model::{demo_contacts, Contact};
use crate::theme::{Theme, ThemeState};

/// Session : liste de contacts, état de routage et dernière cible annoncée.
///
/// Toutes les mutations passent par `&mut self` ; l'évaluation est
/// synchrone, une session ne se réévalue jamais pendant une évaluation.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    contacts: Vec<Contact>,
    raw: String,
    routing: RoutingState,
    last_announced: String,
    host_hour: Option<i32>,
    theme: ThemeState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::random(),
            contacts: Vec::new(),
            raw: String::new(),
            routing: RoutingState::default(),
            last_announced: String::new(),
            host_hour: None,
            theme: ThemeState::default(),
        }
    }

    /// Session pré-remplie ; le texte brut est régénéré en TSV.
    pub fn with_contacts(contacts: Vec<Contact>) -> Result<Self, RoutingError> {
        let mut s = Self::new();
        s.raw = io::contacts_to_tsv(&contacts)?;
        s.contacts = contacts;
        Ok(s)
    }

    pub fn with_demo_contacts() -> Result<Self, RoutingError> {
        Self::with_contacts(demo_contacts())
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
    pub fn raw_text(&self) -> &str {
        &self.raw
    }
    pub fn routing(&self) -> &RoutingState {
        &self.routing
    }
    pub fn last_announced(&self) -> &str {
        &self.last_announced
    }
    pub fn host_hour(&self) -> Option<i32> {
        self.host_hour
    }
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Remplace toute la liste à partir d'un texte TSV. Renvoie le nombre de contacts.
    pub fn replace_contacts(&mut self, text: &str) -> usize {
        self.raw = io::trim_blank_edges(text).to_string();
        self.contacts = io::parse_contacts(&self.raw);
        #[cfg(feature = "logging")]
        tracing::debug!(session = self.id.as_str(), count = self.contacts.len(), "contacts replaced");
        self.contacts.len()
    }

    /// Change de mode sans toucher au contact épinglé.
    pub fn set_mode(&mut self, mode: RoutingMode) {
        self.routing.mode = mode;
    }

    /// Épingle un contact et passe en mode manuel.
    pub fn pick_contact<S: Into<String>>(&mut self, email: S) {
        self.routing = RoutingState::manual(email);
    }

    pub fn set_host_hour(&mut self, hour: i32) {
        self.host_hour = Some(hour);
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_manual();
    }

    /// L'heure de l'hôte prime sur `clock`.
    pub fn reference_hour(&self, clock: &dyn HourSource) -> i32 {
        self.host_hour.unwrap_or_else(|| clock.current_hour())
    }

    pub fn active_theme(&self, hour: i32) -> Theme {
        self.theme.active(hour)
    }

    pub fn evaluate(&mut self, hour: i32) -> SelectionResult {
        let result = select::evaluate(&self.contacts, &self.routing, hour, &mut self.last_announced);
        #[cfg(feature = "logging")]
        if result.changed {
            tracing::debug!(
                session = self.id.as_str(),
                hour,
                mode = %self.routing.mode,
                email = result.email(),
                "selection changed"
            );
        }
        result
    }

    pub fn tick(&mut self, clock: &dyn HourSource) -> SelectionResult {
        let hour = self.reference_hour(clock);
        self.evaluate(hour)
    }

    pub fn statuses(&self, hour: i32) -> Vec<ContactStatus<'_>> {
        select::statuses(&self.contacts, &self.routing, hour)
    }

    /// Applique une commande puis réévalue.
    pub fn apply(&mut self, command: Command, clock: &dyn HourSource) -> SelectionResult {
        match command {
            Command::SetMode(mode) => self.set_mode(mode),
            Command::PickContact(email) => self.pick_contact(email),
            Command::ReplaceContacts(text) => {
                self.replace_contacts(&text);
            }
            Command::SetSystemHour(hour) => self.set_host_hour(hour),
            Command::ToggleTheme => self.toggle_theme(),
            Command::Tick => {}
        }
        self.tick(clock)
    }
}
