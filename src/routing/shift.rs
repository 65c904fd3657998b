/// Indique si l'heure `hour` tombe dans le créneau demi-ouvert `[start, end)`.
///
/// Un créneau avec `start > end` passe minuit (ex. 22 → 6). Quand
/// `start == end` l'intervalle est vide : jamais en service.
pub fn is_on_shift(start: i32, end: i32, hour: i32) -> bool {
    if start > end {
        hour >= start || hour < end
    } else {
        hour >= start && hour < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_window_is_half_open() {
        for hour in 0..24 {
            assert_eq!(is_on_shift(6, 14, hour), (6..14).contains(&hour), "hour {hour}");
        }
    }

    #[test]
    fn night_window_wraps_past_midnight() {
        for hour in 0..24 {
            let expected = hour >= 22 || hour < 6;
            assert_eq!(is_on_shift(22, 6, hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn empty_window_is_never_on_shift() {
        for start in 0..24 {
            assert!((0..24).all(|hour| !is_on_shift(start, start, hour)));
        }
    }

    #[test]
    fn every_window_in_a_day_matches_its_interval() {
        for start in 0..24 {
            for end in 0..24 {
                for hour in 0..24 {
                    let expected = if start < end {
                        (start..end).contains(&hour)
                    } else if start > end {
                        hour >= start || hour < end
                    } else {
                        false
                    };
                    assert_eq!(
                        is_on_shift(start, end, hour),
                        expected,
                        "window {start}->{end} at {hour}"
                    );
                }
            }
        }
    }

    #[test]
    fn wrapped_window_is_complement_of_reverse_day_window() {
        for start in 0..24 {
            for end in 0..start {
                for hour in 0..24 {
                    assert_ne!(is_on_shift(start, end, hour), is_on_shift(end, start, hour));
                }
            }
        }
    }

    #[test]
    fn out_of_range_bounds_are_compared_as_is() {
        // 25 n'est jamais atteint : 20 → 25 couvre 20..24
        assert!(is_on_shift(20, 25, 23));
        assert!(!is_on_shift(20, 25, 3));
        // 25 → 3 passe minuit mais `hour >= 25` est toujours faux
        assert!(is_on_shift(25, 3, 2));
        assert!(!is_on_shift(25, 3, 23));
    }
}
