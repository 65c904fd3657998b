use chrono::{DateTime, Local, TimeZone, Timelike};

/// Source de l'heure de référence utilisée à chaque évaluation.
pub trait HourSource {
    fn current_hour(&self) -> i32;
}

/// Heure figée (tests, hôte, rejouage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHour(pub i32);

impl HourSource for FixedHour {
    fn current_hour(&self) -> i32 {
        self.0
    }
}

/// Horloge murale locale.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HourSource for SystemClock {
    fn current_hour(&self) -> i32 {
        hour_of(&Local::now())
    }
}

/// Heure entière d'un instant (minutes et secondes tronquées).
pub fn hour_of<Tz: TimeZone>(at: &DateTime<Tz>) -> i32 {
    at.hour() as i32
}
