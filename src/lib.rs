#![forbid(unsafe_code)]
//! Permanence — désignation du contact de permanence (sans BD).
//!
//! - Import TSV permissif (valeurs par défaut, jamais d'erreur).
//! - Créneaux horaires demi-ouverts, y compris à cheval sur minuit.
//! - Mode auto (créneaux) ou manuel (contact épinglé).
//! - Annonce dédupliquée des changements de cible ; le transport vers l'hôte reste hors de la lib.

pub mod clock;
pub mod io;
pub mod model;
pub mod publish;
pub mod routing;
pub mod theme;

pub use clock::{FixedHour, HourSource, SystemClock};
pub use io::{contacts_to_tsv, parse_contacts};
pub use model::{demo_contacts, Contact, IconKind};
pub use publish::{HostEvent, HostMirror, HostProperties, HostUpdate, SelectionSink, TextSink};
pub use routing::{
    is_on_shift, Command, ContactStatus, RoutingError, RoutingMode, RoutingState,
    SelectionResult, Session, SessionId,
};
pub use theme::{Theme, ThemeState};
