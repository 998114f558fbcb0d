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

use chrono::Weekday;
use tracing::{debug, warn};

use crate::calendar::{LitGrade, LiturgicalEvent};
use crate::locale::{LocalizationContext, Subject};
use crate::registry::{EventRegistry, VesperFlags};
use crate::resolution::seasons::SeasonAnchors;

/// Vigil sources whose coincidence in 2022 was settled by decree (Prot. N. 113/22).
const DECREE_2022_SOURCES: [&str; 3] = ["SacredHeart", "Lent3", "Assumption"];

/// One side of a Vigil Mass coincidence with its comparable grade label.
#[derive(Debug, Clone, PartialEq)]
pub struct CoincidenceResult {
    pub event: LiturgicalEvent,
    /// Localized label: the weekday name for a Sunday below Solemnity, otherwise the grade
    /// name, emphasised above plain Solemnity.
    pub grade: String,
    pub key: String,
}

impl CoincidenceResult {
    pub fn new(event: &LiturgicalEvent, l10n: &LocalizationContext) -> Self {
        let grade = if event.is_sunday() && event.grade() < LitGrade::Solemnity {
            l10n.weekday(Weekday::Sun).to_string()
        } else if event.grade() > LitGrade::Solemnity {
            format!("<i>{}</i>", l10n.grade(event.grade()))
        } else {
            l10n.grade(event.grade()).to_string()
        };
        CoincidenceResult {
            event: event.clone(),
            grade,
            key: event.key().to_string(),
        }
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            grade: &self.grade,
            name: self.event.name(),
        }
    }
}

/// Returns *true* if `event` takes a Vigil Mass.
///
/// Sundays and celebrations of Solemnity grade or higher do, except All Souls, Ash Wednesday
/// and the days strictly inside Holy Week or the Easter Octave.
pub fn is_vigil_eligible(event: &LiturgicalEvent, anchors: &SeasonAnchors) -> bool {
    (event.grade() >= LitGrade::Solemnity || event.is_sunday())
        && !event.is_vigil_mass()
        && !matches!(event.key(), "AllSouls" | "AshWednesday")
        && !anchors.in_holy_week_or_octave(event.date())
}

/// Create the Vigil Mass of the live event `key` and resolve its coincidence with another
/// celebration on the vigil date.
///
/// # Notes
/// The coinciding celebration wins when its grade is higher, or when it is a Solemnity of the
/// Lord or of the Blessed Virgin Mary and the source is not: the vigil is deleted and the
/// source loses its Vigil Mass and First Vespers. The source wins in the symmetric case and
/// the coinciding celebration loses its Second Vespers. The coincidences of 2022 listed in the
/// decree are won by the source. Any other coincidence is reported without changes, except
/// for a Higher Solemnity source, which is accepted silently.
pub fn resolve_vigil(
    registry: &mut EventRegistry<'_>,
    key: &str,
    anchors: &SeasonAnchors,
    year: i32,
) {
    let l10n = registry.l10n();
    let Some(source) = registry.get_event(key).cloned() else {
        return;
    };
    if !is_vigil_eligible(&source, anchors) {
        return;
    }
    let vigil = source.vigil(l10n.vigil_name(source.name()));
    let (vigil_key, vigil_date) = (vigil.key().to_string(), vigil.date());
    registry.add_event(vigil);
    registry.set_vesper_flags(key, VesperFlags::all(true)).ok();

    let Some(other) = registry.solemnity_on(vigil_date, key) else {
        return;
    };
    let coinciding = CoincidenceResult::new(other, l10n);
    let source_side = CoincidenceResult::new(&source, l10n);
    let season = l10n.season(
        coinciding
            .event
            .liturgical_season()
            .unwrap_or_else(|| anchors.season(vigil_date)),
    );
    let source_lord = registry.is_lord_or_bvm(key);
    let coinciding_lord = registry.is_lord_or_bvm(&coinciding.key);
    let (source_grade, coinciding_grade) = (source.grade(), coinciding.event.grade());

    if coinciding_grade > source_grade || (coinciding_lord && !source_lord) {
        let flags = VesperFlags {
            has_vigil_mass: Some(false),
            has_vesper_i: Some(false),
            has_vesper_ii: None,
        };
        registry.set_vesper_flags(key, flags).ok();
        registry
            .set_vesper_flags(&coinciding.key, VesperFlags::vesper_ii(false))
            .ok();
        registry.delete_event(&vigil_key);
        let msg = l10n.msg_vigil_yields(source_side.subject(), coinciding.subject(), season, year);
        registry.push_message(msg);
        debug!(key, coinciding = %coinciding.key, "vigil yields");
    } else if source_grade > coinciding_grade || (source_lord && !coinciding_lord) {
        registry
            .set_vesper_flags(&coinciding.key, VesperFlags::vesper_ii(false))
            .ok();
        let msg =
            l10n.msg_vigil_prevails(source_side.subject(), coinciding.subject(), season, year);
        registry.push_message(msg);
        debug!(key, coinciding = %coinciding.key, "vigil prevails");
    } else if year == 2022 && DECREE_2022_SOURCES.contains(&key) {
        registry
            .set_vesper_flags(&coinciding.key, VesperFlags::vesper_ii(false))
            .ok();
        let msg = l10n.msg_vigil_decree_2022(source_side.subject(), coinciding.subject(), season);
        registry.push_message(msg);
        debug!(key, coinciding = %coinciding.key, "vigil prevails by decree");
    } else if source_grade != LitGrade::HigherSolemnity {
        warn!(key, coinciding = %coinciding.key, year, "unresolved vigil coincidence");
        let msg =
            l10n.msg_vigil_unresolved(source_side.subject(), coinciding.subject(), season, year);
        registry.push_message(msg);
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{nd, LitColor, LitEventType};
    use chrono::NaiveDate;

    fn fixture_anchors() -> SeasonAnchors {
        // 2022
        SeasonAnchors {
            advent1: nd(2022, 11, 27),
            christmas: nd(2022, 12, 25),
            baptism_lord: nd(2022, 1, 9),
            ash_wednesday: nd(2022, 3, 2),
            palm_sunday: nd(2022, 4, 10),
            holy_thursday: nd(2022, 4, 14),
            easter: nd(2022, 4, 17),
            easter2: nd(2022, 4, 24),
            pentecost: nd(2022, 6, 5),
        }
    }

    fn event(key: &str, date: NaiveDate, grade: LitGrade) -> LiturgicalEvent {
        LiturgicalEvent::new(
            key,
            key,
            date,
            vec![LitColor::White],
            LitEventType::Mobile,
            grade,
            vec![],
        )
    }

    #[test]
    fn test_eligibility() {
        let a = fixture_anchors();
        assert!(is_vigil_eligible(
            &event("Assumption", nd(2022, 8, 15), LitGrade::Solemnity),
            &a
        ));
        assert!(is_vigil_eligible(
            &event("OrdSunday20", nd(2022, 8, 14), LitGrade::FeastOfTheLord),
            &a
        ));
        assert!(!is_vigil_eligible(
            &event("StLawrence", nd(2022, 8, 10), LitGrade::Feast),
            &a
        ));
        assert!(!is_vigil_eligible(
            &event("AllSouls", nd(2022, 11, 2), LitGrade::Solemnity),
            &a
        ));
        assert!(!is_vigil_eligible(
            &event("HolyThurs", nd(2022, 4, 14), LitGrade::HigherSolemnity),
            &a
        ));
        assert!(!is_vigil_eligible(
            &event("MonOctaveEaster", nd(2022, 4, 18), LitGrade::HigherSolemnity),
            &a
        ));
        assert!(is_vigil_eligible(
            &event("Easter", nd(2022, 4, 17), LitGrade::HigherSolemnity),
            &a
        ));
    }

    #[test]
    fn test_grade_labels() {
        let l10n = LocalizationContext::new("en");
        let sunday = event("OrdSunday20", nd(2022, 8, 14), LitGrade::FeastOfTheLord);
        assert_eq!(CoincidenceResult::new(&sunday, &l10n).grade, "Sunday");
        let pentecost = event("Pentecost", nd(2022, 6, 5), LitGrade::HigherSolemnity);
        assert_eq!(
            CoincidenceResult::new(&pentecost, &l10n).grade,
            "<i>celebration with precedence over solemnities</i>"
        );
        let assumption = event("Assumption", nd(2022, 8, 15), LitGrade::Solemnity);
        let result = CoincidenceResult::new(&assumption, &l10n);
        assert_eq!(result.grade, "SOLEMNITY");
        assert_eq!(result.key, "Assumption");
    }

    #[test]
    fn test_vigil_without_coincidence() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("Assumption", nd(2022, 8, 15), LitGrade::Solemnity));
        resolve_vigil(&mut registry, "Assumption", &fixture_anchors(), 2022);
        let vigil = registry.get_event("Assumption_vigil").unwrap();
        assert_eq!(vigil.date(), nd(2022, 8, 14));
        assert_eq!(vigil.is_vigil_for(), Some("Assumption"));
        assert_eq!(vigil.name(), "Assumption Vigil Mass");
        let source = registry.get_event("Assumption").unwrap();
        assert_eq!(source.has_vigil_mass(), Some(true));
        assert!(registry.messages().is_empty());
    }

    #[test]
    fn test_vigil_yields_to_higher_grade() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("Test", nd(2022, 6, 6), LitGrade::Solemnity));
        registry.add_event(event("Pentecost", nd(2022, 6, 5), LitGrade::HigherSolemnity));
        resolve_vigil(&mut registry, "Test", &fixture_anchors(), 2022);
        assert!(!registry.contains("Test_vigil"));
        let source = registry.get_event("Test").unwrap();
        assert_eq!(source.has_vigil_mass(), Some(false));
        assert_eq!(source.has_vesper_i(), Some(false));
        assert_eq!(
            registry.get_event("Pentecost").unwrap().has_vesper_ii(),
            Some(false)
        );
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_vigil_yields_to_lord_or_bvm_of_equal_grade() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("StTest", nd(2022, 12, 9), LitGrade::Solemnity));
        registry.add_event(event(
            "ImmaculateConception",
            nd(2022, 12, 8),
            LitGrade::Solemnity,
        ));
        resolve_vigil(&mut registry, "StTest", &fixture_anchors(), 2022);
        assert!(!registry.contains("StTest_vigil"));
        let source = registry.get_event("StTest").unwrap();
        assert_eq!(source.has_vigil_mass(), Some(false));
        assert_eq!(source.has_vesper_i(), Some(false));
        assert_eq!(
            registry
                .get_event("ImmaculateConception")
                .unwrap()
                .has_vesper_ii(),
            Some(false)
        );
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_lord_or_bvm_prevails() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("Assumption", nd(2023, 8, 15), LitGrade::Solemnity));
        registry.add_event(event("StTest", nd(2023, 8, 14), LitGrade::Solemnity));
        resolve_vigil(&mut registry, "Assumption", &fixture_anchors(), 2023);
        assert!(registry.contains("Assumption_vigil"));
        assert_eq!(
            registry.get_event("StTest").unwrap().has_vesper_ii(),
            Some(false)
        );
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_decree_2022_and_unresolved() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("SacredHeart", nd(2022, 6, 24), LitGrade::Solemnity));
        registry.add_event(event("NativityJohnBaptist", nd(2022, 6, 23), LitGrade::Solemnity));
        resolve_vigil(&mut registry, "SacredHeart", &fixture_anchors(), 2022);
        assert!(registry.contains("SacredHeart_vigil"));
        assert_eq!(
            registry.get_event("SacredHeart").unwrap().has_vigil_mass(),
            Some(true)
        );
        assert_eq!(
            registry
                .get_event("NativityJohnBaptist")
                .unwrap()
                .has_vesper_ii(),
            Some(false)
        );
        assert!(registry.messages()[0].contains("113/22"));

        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("SacredHeart", nd(2022, 6, 24), LitGrade::Solemnity));
        registry.add_event(event("NativityJohnBaptist", nd(2022, 6, 23), LitGrade::Solemnity));
        resolve_vigil(&mut registry, "SacredHeart", &fixture_anchors(), 2023);
        assert!(registry.contains("SacredHeart_vigil"));
        assert_eq!(
            registry
                .get_event("NativityJohnBaptist")
                .unwrap()
                .has_vesper_ii(),
            None
        );
        assert_eq!(registry.messages().len(), 1);
    }

    #[test]
    fn test_higher_solemnity_unresolved_is_silent() {
        let l10n = LocalizationContext::new("en");
        let mut registry = EventRegistry::new(&l10n);
        registry.add_event(event("HigherA", nd(2022, 7, 10), LitGrade::HigherSolemnity));
        registry.add_event(event("HigherB", nd(2022, 7, 9), LitGrade::HigherSolemnity));
        resolve_vigil(&mut registry, "HigherA", &fixture_anchors(), 2022);
        assert!(registry.contains("HigherA_vigil"));
        assert_eq!(registry.get_event("HigherB").unwrap().has_vesper_ii(), None);
        assert!(registry.messages().is_empty());
    }
}
