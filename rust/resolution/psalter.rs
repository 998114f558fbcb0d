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

use tracing::debug;

use crate::calendar::LitGrade;
use crate::registry::EventRegistry;

/// Give every live event still lacking one a psalter week.
///
/// A Vigil Mass takes the week of its target, and both get week 0 when the target has none.
/// A Commemoration or Optional Memorial takes the week of the weekday sharing its date. Any
/// other event gets week 0.
pub fn backfill_psalter_weeks(registry: &mut EventRegistry<'_>) {
    let mut filled = 0;
    for key in registry.keys().iter() {
        let Some(event) = registry.get_event(key) else {
            continue;
        };
        if event.psalter_week().is_some() {
            continue;
        }
        let week = if let Some(target) = event.is_vigil_for().map(str::to_string) {
            match registry.get_event(&target).and_then(|t| t.psalter_week()) {
                Some(week) => week,
                None => {
                    registry.set_psalter_week(&target, 0).ok();
                    0
                }
            }
        } else if matches!(
            event.grade(),
            LitGrade::Commemoration | LitGrade::OptionalMemorial
        ) {
            registry
                .events_on_date(event.date())
                .iter()
                .find(|e| e.grade() == LitGrade::Weekday && !e.is_vigil_mass())
                .and_then(|e| e.psalter_week())
                .unwrap_or(0)
        } else {
            0
        };
        registry.set_psalter_week(key, week).ok();
        filled += 1;
    }
    debug!(filled, "back-filled psalter weeks");
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{nd, LitColor, LitEventType, LiturgicalEvent};
    use crate::locale::LocalizationContext;
    use chrono::NaiveDate;

    fn event(key: &str, date: NaiveDate, grade: LitGrade) -> LiturgicalEvent {
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
    fn test_backfill() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        let mut weekday = event("OrdWeekday11Monday", nd(2024, 6, 17), LitGrade::Weekday);
        weekday.psalter_week = Some(3);
        registry.add_event(weekday);
        registry.add_event(event("StTest", nd(2024, 6, 17), LitGrade::OptionalMemorial));
        registry.add_event(event("StOther", nd(2024, 6, 18), LitGrade::Memorial));
        registry.add_event(event("OrdSunday12", nd(2024, 6, 23), LitGrade::FeastOfTheLord));
        let assumption = event("Assumption", nd(2024, 8, 15), LitGrade::Solemnity);
        registry.add_event(assumption.vigil("Assumption Vigil Mass".to_string()));
        registry.add_event(assumption);
        let sunday = registry.get_event("OrdSunday12").unwrap().clone();
        registry.add_event(sunday.vigil("OrdSunday12 Vigil Mass".to_string()));

        backfill_psalter_weeks(&mut registry);
        let week = |key: &str| registry.get_event(key).unwrap().psalter_week();
        assert_eq!(week("StTest"), Some(3));
        assert_eq!(week("StOther"), Some(0));
        assert_eq!(week("OrdSunday12"), Some(4));
        assert_eq!(week("OrdSunday12_vigil"), Some(4));
        assert_eq!(week("Assumption_vigil"), Some(0));
        assert_eq!(week("Assumption"), Some(0));
    }
}
