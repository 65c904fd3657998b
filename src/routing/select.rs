use super::{shift::is_on_shift, ContactStatus, RoutingMode, RoutingState, SelectionResult};
use crate::model::Contact;

/// Premier contact en service à `hour`, dans l'ordre de la liste.
pub fn auto_candidate(contacts: &[Contact], hour: i32) -> Option<&Contact> {
    contacts
        .iter()
        .find(|c| is_on_shift(c.shift_start, c.shift_end, hour))
}

/// Contact épinglé ; une clé vide ou absente de la liste ne désigne personne.
pub fn manual_target<'a>(contacts: &'a [Contact], key: &str) -> Option<&'a Contact> {
    if key.is_empty() {
        return None;
    }
    contacts.iter().find(|c| c.email == key)
}

/// Cible courante selon le mode de routage.
pub fn resolve_target<'a>(
    contacts: &'a [Contact],
    routing: &RoutingState,
    hour: i32,
) -> Option<&'a Contact> {
    match routing.mode {
        RoutingMode::Auto => auto_candidate(contacts, hour),
        RoutingMode::Manual => manual_target(contacts, &routing.manual_key),
    }
}

/// Évalue la sélection et met à jour `last_announced`.
///
/// `changed` n'est vrai que si l'email obtenu est non vide et diffère du
/// dernier annoncé ; `last_announced` n'est modifié que dans ce cas.
pub fn evaluate(
    contacts: &[Contact],
    routing: &RoutingState,
    hour: i32,
    last_announced: &mut String,
) -> SelectionResult {
    let active = resolve_target(contacts, routing, hour).cloned();
    let email = active.as_ref().map_or("", |c| c.email.as_str());
    let changed = !email.is_empty() && email != last_announced.as_str();
    if changed {
        email.clone_into(last_announced);
    }
    SelectionResult { active, changed }
}

/// Statut de chaque contact pour l'affichage.
///
/// En mode auto, tous les contacts en service sont marqués sélectionnés,
/// même si seul le premier est la cible.
pub fn statuses<'a>(
    contacts: &'a [Contact],
    routing: &RoutingState,
    hour: i32,
) -> Vec<ContactStatus<'a>> {
    contacts
        .iter()
        .map(|contact| {
            let on_shift = is_on_shift(contact.shift_start, contact.shift_end, hour);
            let selected = match routing.mode {
                RoutingMode::Auto => on_shift,
                RoutingMode::Manual => {
                    !routing.manual_key.is_empty() && contact.email == routing.manual_key
                }
            };
            ContactStatus {
                contact,
                on_shift,
                selected,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Contact> {
        vec![
            Contact::new("Night", "n@x.com", "Night", 22, 6),
            Contact::new("Day", "d@x.com", "Day", 6, 14),
        ]
    }

    #[test]
    fn auto_follows_the_clock() {
        let contacts = roster();
        let routing = RoutingState::default();
        let target = |h| resolve_target(&contacts, &routing, h).map(|c| c.email.as_str());
        assert_eq!(target(23), Some("n@x.com"));
        assert_eq!(target(10), Some("d@x.com"));
        assert_eq!(target(18), None);
    }

    #[test]
    fn overlap_prefers_first_in_list() {
        let contacts = vec![
            Contact::new("A", "a@x.com", "Lead", 8, 16),
            Contact::new("B", "b@x.com", "Lead", 9, 17),
        ];
        let got = auto_candidate(&contacts, 10).map(|c| c.email.as_str());
        assert_eq!(got, Some("a@x.com"));

        let view = statuses(&contacts, &RoutingState::default(), 10);
        assert!(view.iter().all(|s| s.on_shift && s.selected));
    }

    #[test]
    fn manual_statuses_mark_only_the_pinned_contact() {
        let contacts = roster();
        let view = statuses(&contacts, &RoutingState::manual("n@x.com"), 10);
        assert_eq!(view.len(), 2);
        assert!(view[0].selected && !view[0].on_shift);
        assert!(!view[1].selected && view[1].on_shift);

        let unpinned = statuses(&contacts, &RoutingState::manual(""), 23);
        assert!(unpinned.iter().all(|s| !s.selected));
        assert!(unpinned[0].on_shift);
    }

    #[test]
    fn empty_manual_key_matches_nobody() {
        let mut contacts = roster();
        contacts.push(Contact::new("Blank", "", "Staff", 0, 0));
        assert!(manual_target(&contacts, "").is_none());
    }

    #[test]
    fn evaluate_announces_once() {
        let contacts = roster();
        let routing = RoutingState::default();
        let mut last = String::new();
        assert!(evaluate(&contacts, &routing, 23, &mut last).changed);
        assert_eq!(last, "n@x.com");
        assert!(!evaluate(&contacts, &routing, 23, &mut last).changed);
    }

    #[test]
    fn losing_the_target_keeps_last_announced() {
        let contacts = roster();
        let routing = RoutingState::default();
        let mut last = String::new();
        evaluate(&contacts, &routing, 10, &mut last);
        let none = evaluate(&contacts, &routing, 18, &mut last);
        assert!(none.active.is_none());
        assert!(!none.changed);
        assert_eq!(last, "d@x.com");
        // retour sur la même cible : pas de nouvelle annonce
        assert!(!evaluate(&contacts, &routing, 11, &mut last).changed);
    }
}
