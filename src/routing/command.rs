use super::{RoutingError, RoutingMode};
use std::str::FromStr;

/// Commande discrète appliquée à une session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(RoutingMode),
    PickContact(String),
    ReplaceContacts(String),
    /// Heure fournie par l'hôte ; prioritaire sur l'horloge.
    SetSystemHour(i32),
    ToggleTheme,
    Tick,
}

/// Forme texte : `mode auto|manual`, `pick <email>`, `hour <n>`, `theme`, `tick`.
///
/// `replace` prend le reste de la ligne ; `\t` et `\n` y sont interprétés
/// comme tabulation et saut de ligne.
impl FromStr for Command {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (s, ""),
        };
        match verb {
            "mode" => Ok(Self::SetMode(required(arg, "mode")?.parse()?)),
            "pick" => Ok(Self::PickContact(required(arg, "pick")?.to_string())),
            "replace" => Ok(Self::ReplaceContacts(
                arg.replace("\\t", "\t").replace("\\n", "\n"),
            )),
            "hour" => {
                let raw = required(arg, "hour")?;
                raw.parse()
                    .map(Self::SetSystemHour)
                    .map_err(|_| RoutingError::InvalidHour(raw.to_string()))
            }
            "theme" => Ok(Self::ToggleTheme),
            "tick" => Ok(Self::Tick),
            other => Err(RoutingError::UnknownCommand(other.to_string())),
        }
    }
}

fn required<'a>(arg: &'a str, verb: &'static str) -> Result<&'a str, RoutingError> {
    if arg.is_empty() {
        Err(RoutingError::MissingArgument(verb))
    } else {
        Ok(arg)
    }
}
