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

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::calendar::{nd, LitColor, LitEventType, LitGrade, LiturgicalEvent};
use crate::locale::WeekdayLabel;
use crate::proper::movable::{sunday_on_or_before, MovableFeasts};
use crate::registry::{psalter_week, EventRegistry};

/// A weekday placeholder before it is added to a registry.
#[derive(Debug, Clone, PartialEq)]
struct Placeholder {
    key: String,
    label: WeekdayLabel,
    color: LitColor,
    psalter_week: u8,
    privileged: bool,
}

fn weeks_since(sunday: NaiveDate, date: NaiveDate) -> u32 {
    ((sunday_on_or_before(date) - sunday).num_days() / 7) as u32
}

fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Return the weekday placeholder of a non-Sunday `date`, if the date has one.
///
/// Dates owned by the Proper of Time itself (Holy Week, the Easter Octave, Ash Wednesday and
/// the days of the Christmas cycle with their own celebration) have no placeholder.
fn placeholder(feasts: &MovableFeasts, date: NaiveDate) -> Option<Placeholder> {
    let year = feasts.year;
    let week_key = |prefix: &str, week: u32| format!("{}{}{}", prefix, week, day_name(date));
    let make = |key: String, label, color, week: i32, privileged| Placeholder {
        key,
        label,
        color,
        psalter_week: psalter_week(week),
        privileged,
    };

    if date < feasts.epiphany && date > nd(year, 1, 1) {
        Some(make(
            format!("DayBeforeEpiphany{}", date.day()),
            WeekdayLabel::BeforeEpiphany,
            LitColor::White,
            2,
            false,
        ))
    } else if date > feasts.epiphany && date < feasts.baptism_lord {
        Some(make(
            format!("DayAfterEpiphany{}", date.day()),
            WeekdayLabel::AfterEpiphany,
            LitColor::White,
            2,
            false,
        ))
    } else if date > feasts.baptism_lord && date < feasts.ash_wednesday {
        let week = 1 + weeks_since(sunday_on_or_before(feasts.baptism_lord), date);
        Some(make(
            week_key("OrdWeekday", week),
            WeekdayLabel::Ordinary { week },
            LitColor::Green,
            week as i32,
            false,
        ))
    } else if date > feasts.ash_wednesday && date < feasts.lent1 {
        Some(make(
            format!("LentWeekday0{}", day_name(date)),
            WeekdayLabel::AfterAshWednesday,
            LitColor::Purple,
            0,
            true,
        ))
    } else if date > feasts.lent1 && date < feasts.palm_sunday {
        let week = 1 + weeks_since(feasts.lent1, date);
        Some(make(
            week_key("LentWeekday", week),
            WeekdayLabel::Lent { week },
            LitColor::Purple,
            week as i32,
            true,
        ))
    } else if date > feasts.easter2 && date < feasts.pentecost {
        let week = 1 + weeks_since(feasts.easter, date);
        Some(make(
            week_key("EasterWeekday", week),
            WeekdayLabel::Easter { week },
            LitColor::White,
            week as i32,
            false,
        ))
    } else if date > feasts.pentecost && date < feasts.advent1 {
        let week = (34 - (feasts.christ_king - sunday_on_or_before(date)).num_days() / 7) as u32;
        Some(make(
            week_key("OrdWeekday", week),
            WeekdayLabel::Ordinary { week },
            LitColor::Green,
            week as i32,
            false,
        ))
    } else if date > feasts.advent1 && date < nd(year, 12, 17) {
        let week = 1 + weeks_since(feasts.advent1, date);
        Some(make(
            week_key("AdventWeekday", week),
            WeekdayLabel::Advent { week },
            LitColor::Purple,
            week as i32,
            false,
        ))
    } else if date >= nd(year, 12, 17) && date <= nd(year, 12, 24) {
        let week = 1 + weeks_since(feasts.advent1, date);
        Some(make(
            format!("AdventWeekdayDec{}", date.day()),
            WeekdayLabel::AdventDecember,
            LitColor::Purple,
            week as i32,
            true,
        ))
    } else if date > feasts.christmas {
        Some(make(
            format!("ChristmasWeekdayDec{}", date.day()),
            WeekdayLabel::ChristmasOctave {
                day: date.day() - 24,
            },
            LitColor::White,
            1,
            false,
        ))
    } else {
        None
    }
}

/// Fill the civil year with weekday placeholders.
///
/// A placeholder is created on every non-Sunday date without a Memorial or higher celebration.
/// The weekdays of Lent and of December 17 to 24 are also created beside a Memorial, but never
/// beside a Feast or higher celebration. Returns the number of placeholders created.
pub fn generate_weekdays(registry: &mut EventRegistry<'_>, feasts: &MovableFeasts) -> usize {
    let l10n = registry.l10n();
    let mut created = 0;
    let mut date = nd(feasts.year, 1, 2);
    let last = nd(feasts.year, 12, 31);
    while date <= last {
        if date.weekday() != Weekday::Sun {
            if let Some(p) = placeholder(feasts, date) {
                let threshold = if p.privileged {
                    LitGrade::Feast
                } else {
                    LitGrade::Memorial
                };
                let impeded = registry
                    .events_on_date(date)
                    .iter()
                    .any(|e| e.grade() >= threshold);
                if !impeded && !registry.contains(&p.key) {
                    let mut event = LiturgicalEvent::new(
                        &p.key,
                        &l10n.weekday_name(p.label, date),
                        date,
                        vec![p.color],
                        LitEventType::Mobile,
                        LitGrade::Weekday,
                        vec![],
                    );
                    event.psalter_week = Some(p.psalter_week);
                    registry.add_event(event);
                    created += 1;
                } else {
                    debug!(key = %p.key, "weekday impeded");
                }
            }
        }
        date = date + Days::new(1);
    }
    created
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarDefaults, CalendarSettings};
    use crate::locale::LocalizationContext;
    use crate::proper::derive_movable_feasts;

    fn fixture_feasts(year: i32) -> MovableFeasts {
        derive_movable_feasts(&CalendarSettings::new(year).resolve(&CalendarDefaults::default()))
    }

    #[test]
    fn test_placeholder_keys_2024() {
        let f = fixture_feasts(2024);
        let p = placeholder(&f, nd(2024, 1, 9)).unwrap();
        assert_eq!(p.key, "OrdWeekday1Tuesday");
        let p = placeholder(&f, nd(2024, 2, 13)).unwrap();
        assert_eq!(p.key, "OrdWeekday6Tuesday");
        let p = placeholder(&f, nd(2024, 2, 16)).unwrap();
        assert_eq!(p.key, "LentWeekday0Friday");
        assert_eq!(p.psalter_week, 4);
        let p = placeholder(&f, nd(2024, 3, 6)).unwrap();
        assert_eq!(p.key, "LentWeekday3Wednesday");
        assert_eq!(p.psalter_week, 3);
        let p = placeholder(&f, nd(2024, 4, 10)).unwrap();
        assert_eq!(p.key, "EasterWeekday2Wednesday");
        let p = placeholder(&f, nd(2024, 6, 17)).unwrap();
        assert_eq!(p.key, "OrdWeekday11Monday");
        assert_eq!(p.psalter_week, 3);
        let p = placeholder(&f, nd(2024, 12, 3)).unwrap();
        assert_eq!(p.key, "AdventWeekday1Tuesday");
        let p = placeholder(&f, nd(2024, 12, 18)).unwrap();
        assert_eq!(p.key, "AdventWeekdayDec18");
        let p = placeholder(&f, nd(2024, 12, 30)).unwrap();
        assert_eq!(p.key, "ChristmasWeekdayDec30");
        assert!(placeholder(&f, nd(2024, 3, 26)).is_none());
        assert!(placeholder(&f, nd(2024, 4, 2)).is_none());
        assert!(placeholder(&f, nd(2024, 1, 6)).is_none());
    }

    #[test]
    fn test_generate_respects_memorials() {
        let l10n = LocalizationContext::new("en");
        let f = fixture_feasts(2024);
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(LiturgicalEvent::new(
            "StAnthonyPadua",
            "Saint Anthony of Padua",
            nd(2024, 6, 13),
            vec![LitColor::White],
            LitEventType::Fixed,
            LitGrade::Memorial,
            vec![],
        ));
        registry.add_event(LiturgicalEvent::new(
            "StJohnDamascene",
            "Saint John Damascene",
            nd(2024, 12, 4),
            vec![LitColor::White],
            LitEventType::Fixed,
            LitGrade::OptionalMemorial,
            vec![],
        ));
        generate_weekdays(&mut registry, &f);
        assert!(!registry.contains("OrdWeekday10Thursday"));
        assert!(registry.contains("OrdWeekday10Friday"));
        assert!(registry.contains("AdventWeekday1Wednesday"));
        let event = registry.get_event("OrdWeekday11Monday").unwrap();
        assert_eq!(event.name(), "Monday of the 11th Week of Ordinary Time");
        assert_eq!(event.psalter_week(), Some(3));
        assert_eq!(event.grade(), LitGrade::Weekday);
    }
}
