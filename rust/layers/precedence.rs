// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

//! Placement of Sanctorale events against the celebrations already on their date.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::{LitGrade, LiturgicalEvent};
use crate::locale::Subject;
use crate::proper::{shift, MovableFeasts};
use crate::registry::{EventRegistry, LitPeriod};

/// Outcome of [`place_event`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The event is live on `date`, which differs from the requested date after a transfer.
    Placed { date: NaiveDate },
    /// The event was impeded and not created.
    Skipped,
}

/// A celebration already live on a date.
#[derive(Debug, Clone)]
struct Occupant {
    key: String,
    name: String,
    grade: LitGrade,
    grade_lcl: String,
    seasonal_sunday: bool,
}

impl Occupant {
    fn subject(&self) -> Subject<'_> {
        Subject {
            grade: &self.grade_lcl,
            name: &self.name,
        }
    }

    fn is_replaceable_sunday(&self) -> bool {
        self.key.starts_with("OrdSunday") || self.key == "Christmas2"
    }
}

fn occupants(registry: &EventRegistry<'_>, date: NaiveDate) -> Vec<Occupant> {
    registry
        .events_on_date(date)
        .into_iter()
        .filter(|e| !e.is_vigil_mass())
        .map(|e| Occupant {
            key: e.key().to_string(),
            name: e.name().to_string(),
            grade: e.grade(),
            grade_lcl: e.grade_lcl().to_string(),
            seasonal_sunday: [
                LitPeriod::AdventSundays,
                LitPeriod::LentSundays,
                LitPeriod::EasterSundays,
            ]
            .iter()
            .any(|p| registry.in_period(e.key(), *p)),
        })
        .collect()
}

/// Returns *true* on the days where Memorials are reduced to Commemorations: Lent until Holy
/// Thursday and December 17 to 24.
pub(crate) fn is_privileged_weekday(feasts: &MovableFeasts, date: NaiveDate) -> bool {
    (date >= feasts.ash_wednesday && date < feasts.holy_thursday)
        || (date.month() == 12 && (17..=24).contains(&date.day()))
}

/// Date to which a Solemnity impeded on `date` is transferred.
fn transfer_date(feasts: &MovableFeasts, key: &str, date: NaiveDate) -> NaiveDate {
    if date >= feasts.palm_sunday && date < feasts.easter2 {
        if key == "StJoseph" {
            shift(feasts.palm_sunday, -1)
        } else {
            shift(feasts.easter2, 1)
        }
    } else {
        shift(date, 1)
    }
}

/// Add a Sanctorale event to `registry`, resolving its coincidence with the celebrations
/// already on its date.
///
/// # Notes
/// - An event graded Feast or lower is not created on a date holding a Feast or higher; a
///   message is recorded for Memorials and above. A Memorial in Lent or on December 17 to 24 is
///   reduced to a Commemoration.
/// - A Feast of the Lord replaces a Sunday of Ordinary Time or the Second Sunday after
///   Christmas, and any lower occupant.
/// - A Solemnity impeded by a Higher Solemnity or by a Sunday of Advent, Lent or Easter is
///   transferred: to the Monday after the Second Sunday of Easter within Holy Week and the
///   Easter Octave (Saint Joseph to the Saturday before Palm Sunday), otherwise to the next day.
///   It replaces any lower occupant of its final date and coexists with an equal one.
pub fn place_event(
    registry: &mut EventRegistry<'_>,
    feasts: &MovableFeasts,
    mut event: LiturgicalEvent,
) -> Placement {
    let l10n = registry.l10n();
    let year = feasts.year;

    if matches!(
        event.grade,
        LitGrade::Memorial | LitGrade::OptionalMemorial
    ) && is_privileged_weekday(feasts, event.date)
    {
        debug!(key = %event.key, date = %event.date, "reduced to commemoration");
        event.grade = LitGrade::Commemoration;
    }
    let grade_lcl = l10n.grade(event.grade);

    if event.grade <= LitGrade::Feast {
        let occ = occupants(registry, event.date);
        if let Some(by) = occ
            .iter()
            .filter(|o| o.grade >= LitGrade::Feast)
            .max_by_key(|o| o.grade)
        {
            if event.grade >= LitGrade::Memorial {
                let msg = l10n.msg_skipped(
                    Subject {
                        grade: grade_lcl,
                        name: &event.name,
                    },
                    event.date,
                    by.subject(),
                    year,
                );
                registry.push_message(msg);
            }
            debug!(key = %event.key, by = %by.key, "impeded");
            return Placement::Skipped;
        }
        let date = event.date;
        registry.add_event(event);
        return Placement::Placed { date };
    }

    if event.grade == LitGrade::FeastOfTheLord {
        let occ = occupants(registry, event.date);
        if let Some(by) = occ
            .iter()
            .find(|o| o.grade >= LitGrade::FeastOfTheLord && !o.is_replaceable_sunday())
        {
            let msg = l10n.msg_skipped(
                Subject {
                    grade: grade_lcl,
                    name: &event.name,
                },
                event.date,
                by.subject(),
                year,
            );
            registry.push_message(msg);
            return Placement::Skipped;
        }
        replace_occupants(registry, &event, occ, year);
        let date = event.date;
        registry.add_event(event);
        return Placement::Placed { date };
    }

    // Solemnities: at most two transfers, after which the event is placed regardless
    for _ in 0..3 {
        let occ = occupants(registry, event.date);
        let Some(by) = occ
            .iter()
            .find(|o| o.grade == LitGrade::HigherSolemnity || o.seasonal_sunday)
        else {
            break;
        };
        let to = transfer_date(feasts, &event.key, event.date);
        let msg = l10n.msg_transferred(
            Subject {
                grade: grade_lcl,
                name: &event.name,
            },
            by.subject(),
            to,
            year,
        );
        registry.push_message(msg);
        debug!(key = %event.key, from = %event.date, to = %to, "transferred");
        event.date = to;
    }
    let occ = occupants(registry, event.date);
    let (lower, equal): (Vec<Occupant>, Vec<Occupant>) =
        occ.into_iter().partition(|o| o.grade < event.grade);
    for other in equal.iter() {
        let msg = l10n.msg_coincides(
            Subject {
                grade: grade_lcl,
                name: &event.name,
            },
            other.subject(),
            event.date,
            year,
        );
        registry.push_message(msg);
    }
    replace_occupants(registry, &event, lower, year);
    let date = event.date;
    registry.add_event(event);
    Placement::Placed { date }
}

/// Suppress `occupants` in favour of `event`, recording a message for Memorials and above.
fn replace_occupants(
    registry: &mut EventRegistry<'_>,
    event: &LiturgicalEvent,
    occupants: Vec<Occupant>,
    year: i32,
) {
    let l10n = registry.l10n();
    for other in occupants {
        if registry.remove_event(&other.key).is_err() {
            continue;
        }
        if other.grade >= LitGrade::Memorial {
            let msg = l10n.msg_replaced(
                Subject {
                    grade: l10n.grade(event.grade),
                    name: &event.name,
                },
                other.subject(),
                event.date,
                year,
            );
            registry.push_message(msg);
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{nd, CalendarDefaults, CalendarSettings, LitColor, LitEventType};
    use crate::locale::LocalizationContext;
    use crate::proper::{derive_movable_feasts, proper_of_time_entry};

    fn fixture_feasts(year: i32) -> MovableFeasts {
        derive_movable_feasts(&CalendarSettings::new(year).resolve(&CalendarDefaults::default()))
    }

    fn fixture_registry<'l>(l10n: &'l LocalizationContext, feasts: &MovableFeasts) -> EventRegistry<'l> {
        let mut registry = EventRegistry::new(l10n);
        for (key, date) in feasts.entries.iter() {
            let entry = proper_of_time_entry(key).unwrap();
            registry.add_event(LiturgicalEvent::new(
                key,
                key,
                *date,
                entry.color.to_vec(),
                entry.event_type,
                entry.grade,
                vec![],
            ));
        }
        registry
    }

    fn saint(key: &str, date: NaiveDate, grade: LitGrade) -> LiturgicalEvent {
        LiturgicalEvent::new(
            key,
            key,
            date,
            vec![LitColor::White],
            LitEventType::Fixed,
            grade,
            vec![],
        )
    }

    #[test]
    fn test_memorial_impeded_by_sunday() {
        // 2024-06-16 is the 11th Sunday in Ordinary Time
        let l10n = LocalizationContext::new("en");
        let feasts = fixture_feasts(2024);
        let mut registry = fixture_registry(&l10n, &feasts);
        let placement = place_event(
            &mut registry,
            &feasts,
            saint("StTest", nd(2024, 6, 16), LitGrade::Memorial),
        );
        assert_eq!(placement, Placement::Skipped);
        assert!(!registry.contains("StTest"));
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_memorial_reduced_in_lent() {
        let l10n = LocalizationContext::new("en");
        let feasts = fixture_feasts(2024);
        let mut registry = fixture_registry(&l10n, &feasts);
        place_event(
            &mut registry,
            &feasts,
            saint("StPerpetua", nd(2024, 3, 7), LitGrade::Memorial),
        );
        let event = registry.get_event("StPerpetua").unwrap();
        assert_eq!(event.grade(), LitGrade::Commemoration);
        assert!(!registry.memorials().contains("StPerpetua"));
    }

    #[test]
    fn test_feast_of_the_lord_replaces_ordinary_sunday() {
        // Transfiguration on Sunday 2023-08-06
        let l10n = LocalizationContext::new("en");
        let feasts = fixture_feasts(2023);
        let mut registry = fixture_registry(&l10n, &feasts);
        let sunday = registry
            .events_on_date(nd(2023, 8, 6))
            .first()
            .map(|e| e.key().to_string())
            .unwrap();
        assert_eq!(sunday, "OrdSunday18");
        place_event(
            &mut registry,
            &feasts,
            saint("Transfiguration", nd(2023, 8, 6), LitGrade::FeastOfTheLord),
        );
        assert!(registry.contains("Transfiguration"));
        assert!(registry.is_suppressed("OrdSunday18"));
    }

    #[test]
    fn test_solemnity_transfers() {
        let l10n = LocalizationContext::new("en");
        // Annunciation 2024-03-25 is Monday of Holy Week
        let feasts = fixture_feasts(2024);
        let mut registry = fixture_registry(&l10n, &feasts);
        let placement = place_event(
            &mut registry,
            &feasts,
            saint("Annunciation", nd(2024, 3, 25), LitGrade::Solemnity),
        );
        assert_eq!(
            placement,
            Placement::Placed {
                date: nd(2024, 4, 8)
            }
        );

        // Saint Joseph 2035-03-19 is Monday of Holy Week
        let feasts = fixture_feasts(2035);
        let mut registry = fixture_registry(&l10n, &feasts);
        assert_eq!(feasts.palm_sunday, nd(2035, 3, 18));
        let placement = place_event(
            &mut registry,
            &feasts,
            saint("StJoseph", nd(2035, 3, 19), LitGrade::Solemnity),
        );
        assert_eq!(
            placement,
            Placement::Placed {
                date: nd(2035, 3, 17)
            }
        );

        // Immaculate Conception 2024-12-08 is the Second Sunday of Advent
        let feasts = fixture_feasts(2024);
        let mut registry = fixture_registry(&l10n, &feasts);
        let placement = place_event(
            &mut registry,
            &feasts,
            saint("ImmaculateConception", nd(2024, 12, 8), LitGrade::Solemnity),
        );
        assert_eq!(
            placement,
            Placement::Placed {
                date: nd(2024, 12, 9)
            }
        );
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_equal_solemnities_coexist() {
        // Sacred Heart 2022-06-24
        let l10n = LocalizationContext::new("en");
        let feasts = fixture_feasts(2022);
        let mut registry = fixture_registry(&l10n, &feasts);
        place_event(
            &mut registry,
            &feasts,
            saint("NativityJohnBaptist", nd(2022, 6, 24), LitGrade::Solemnity),
        );
        assert!(registry.contains("NativityJohnBaptist"));
        assert!(registry.contains("SacredHeart"));
        assert_eq!(registry.messages().len(), 1);
    }
}
