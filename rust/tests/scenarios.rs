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

use crate::calendar::{nd, CalendarSettings, Jurisdiction, LitGrade, LitSeason, LiturgicalCycle, YearType};
use crate::computus::julian_easter;
use crate::engine::{compute, compute_from_dir, CalendarResult};
use crate::json::JSON;
use crate::resources::ResourceLoader;
use crate::tests::data_dir;
use chrono::Duration;

fn general(year: i32) -> CalendarResult {
    compute_from_dir(&CalendarSettings::new(year), data_dir()).unwrap()
}

fn turin(year: i32) -> CalendarResult {
    let mut settings = CalendarSettings::new(year);
    settings.calendar = Jurisdiction::Diocesan {
        id: "TURIN".to_string(),
    };
    compute_from_dir(&settings, data_dir()).unwrap()
}

#[test]
fn sacred_heart_2022_vigil_follows_decree() {
    let result = general(2022);
    let sacred_heart = result.get("SacredHeart").unwrap();
    assert_eq!(sacred_heart.date(), nd(2022, 6, 24));
    assert_eq!(sacred_heart.has_vigil_mass(), Some(true));
    let vigil = result.get("SacredHeart_vigil").unwrap();
    assert_eq!(vigil.date(), nd(2022, 6, 23));

    let john_baptist = result.get("NativityJohnBaptist").unwrap();
    assert_eq!(john_baptist.date(), nd(2022, 6, 23));
    assert_eq!(john_baptist.has_vesper_ii(), Some(false));
    assert!(result.messages.iter().any(|m| m.contains("113/22")));
}

#[test]
fn third_sunday_of_lent_2022_vigil_follows_decree() {
    let result = general(2022);
    let lent3 = result.get("Lent3").unwrap();
    assert_eq!(lent3.date(), nd(2022, 3, 20));
    assert_eq!(lent3.has_vigil_mass(), Some(true));
    assert_eq!(result.get("Lent3_vigil").unwrap().date(), nd(2022, 3, 19));

    let joseph = result.get("StJoseph").unwrap();
    assert_eq!(joseph.date(), nd(2022, 3, 19));
    assert_eq!(joseph.has_vesper_ii(), Some(false));
    assert!(result
        .messages
        .iter()
        .any(|m| m.contains("113/22") && m.contains(lent3.name())));
}

#[test]
fn nativity_john_baptist_keeps_date_outside_2022() {
    let result = general(2023);
    let john_baptist = result.get("NativityJohnBaptist").unwrap();
    assert_eq!(john_baptist.date(), nd(2023, 6, 24));
    assert!(!result.messages.iter().any(|m| m.contains("113/22")));
}

#[test]
fn solemnity_transferred_out_of_holy_week() {
    // Annunciation 2024 falls on Monday of Holy Week
    let result = general(2024);
    assert_eq!(result.get("Annunciation").unwrap().date(), nd(2024, 4, 8));
    assert_eq!(result.get("MonHolyWeek").unwrap().date(), nd(2024, 3, 25));
}

#[test]
fn legislated_memorials_follow_their_years() {
    let result = general(2024);
    let mother_church = result.get("MaryMotherChurch").unwrap();
    assert_eq!(mother_church.date(), nd(2024, 5, 20));
    assert_eq!(mother_church.grade(), LitGrade::Memorial);
    assert_eq!(
        result.get("StMaryMagdalene").unwrap().grade(),
        LitGrade::Feast
    );

    let result = general(2015);
    assert!(result.get("MaryMotherChurch").is_none());
    assert_eq!(
        result.get("StMaryMagdalene").unwrap().grade(),
        LitGrade::Memorial
    );
}

#[test]
fn liturgical_year_spans_advent_to_advent() {
    let mut settings = CalendarSettings::new(2025);
    settings.year_type = YearType::Liturgical;
    let result = compute_from_dir(&settings, data_dir()).unwrap();

    assert_eq!(result.get("Advent1").unwrap().date(), nd(2024, 12, 1));
    assert_eq!(result.get("Christmas").unwrap().date(), nd(2024, 12, 25));
    assert_eq!(result.get("Easter").unwrap().date(), nd(2025, 4, 20));
    assert_eq!(result.get("StAgnes").unwrap().date(), nd(2025, 1, 21));
    for event in result.events.iter() {
        if event.date() < nd(2024, 12, 1) {
            assert_eq!(event.is_vigil_for(), Some("Advent1"), "{} too early", event.key());
        }
        if !event.is_vigil_mass() {
            assert!(event.date() < nd(2025, 11, 30), "{} too late", event.key());
        }
    }
}

#[test]
fn diocesan_calendar_layers_on_national() {
    let result = turin(2024);
    assert_eq!(result.settings.locale, "it");

    let consolata: Vec<_> = result
        .events
        .iter()
        .filter(|e| e.key() == "ConsolataTurin")
        .collect();
    assert_eq!(consolata.len(), 1);
    assert_eq!(consolata[0].date(), nd(2024, 6, 20));
    assert_eq!(consolata[0].grade(), LitGrade::Solemnity);
    assert_eq!(consolata[0].liturgical_season(), Some(LitSeason::OrdinaryTime));
    assert_eq!(consolata[0].liturgical_year(), Some(LiturgicalCycle::SundayB));

    assert_eq!(result.get("StJohnBosco").unwrap().grade(), LitGrade::Feast);
    assert_eq!(result.get("HolyShroud").unwrap().date(), nd(2024, 5, 4));
    assert!(result.get("StFrancisAssisi").unwrap().is_patron());
    assert_eq!(
        result.get("Easter").unwrap().name(),
        "Domenica di Pasqua nella Risurrezione del Signore"
    );
    // national defaults move Ascension and Corpus Christi to Sunday
    assert_eq!(result.get("Ascension").unwrap().date(), nd(2024, 5, 12));
    assert_eq!(result.get("CorpusChristi").unwrap().date(), nd(2024, 6, 2));
}

#[test]
fn caller_settings_override_national_defaults() {
    let mut settings = CalendarSettings::from_json(
        r#"{"year": 2024, "locale": "en", "calendar": {"National": {"id": "IT"}}}"#,
    )
    .unwrap();
    settings.ascension = Some(crate::calendar::AscensionRule::Thursday);
    let result = compute_from_dir(&settings, data_dir()).unwrap();
    assert_eq!(result.settings.locale, "en");
    assert_eq!(result.get("Ascension").unwrap().date(), nd(2024, 5, 9));
    assert_eq!(result.get("CorpusChristi").unwrap().date(), nd(2024, 6, 2));
}

#[test]
fn computation_is_repeatable() {
    let settings = CalendarSettings::new(2024);
    let data = ResourceLoader::new(data_dir()).load(&settings).unwrap();
    let first = compute(&settings, &data).unwrap().to_json().unwrap();
    let second = compute(&settings, &data).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn vigils_precede_their_targets() {
    let result = general(2024);
    let vigils: Vec<_> = result.events.iter().filter(|e| e.is_vigil_mass()).collect();
    assert!(!vigils.is_empty());
    for vigil in vigils {
        let target = result.get(vigil.is_vigil_for().unwrap()).unwrap();
        assert_eq!(vigil.date(), target.date() - Duration::days(1));
    }
}

#[test]
fn sunday_psalter_weeks() {
    let result = general(2024);
    assert_eq!(result.get("OrdSunday11").unwrap().psalter_week(), Some(3));
    assert_eq!(result.get("OrdSunday12").unwrap().psalter_week(), Some(4));
    assert_eq!(result.get("Lent4").unwrap().psalter_week(), Some(4));
    assert_eq!(result.get("Advent1").unwrap().psalter_week(), Some(1));
}

#[test]
fn julian_easter_on_civil_calendar() {
    assert_eq!(julian_easter(2024, true), nd(2024, 5, 5));
}

#[test]
fn unknown_diocese_fails() {
    let mut settings = CalendarSettings::new(2024);
    settings.calendar = Jurisdiction::Diocesan {
        id: "NOWHERE".to_string(),
    };
    assert!(compute_from_dir(&settings, data_dir()).is_err());
}

#[test]
fn liturgical_year_keeps_messages_of_both_passes() {
    let mut settings = CalendarSettings::new(2023);
    let civil_2022 = general(2022);
    let civil_2023 = general(2023);
    settings.year_type = YearType::Liturgical;
    let result = compute_from_dir(&settings, data_dir()).unwrap();

    // Sacred Heart 2022 falls before Advent 2022 and is purged
    assert_eq!(result.get("SacredHeart").unwrap().date(), nd(2023, 6, 16));
    let expected: Vec<String> = civil_2022
        .messages
        .iter()
        .chain(civil_2023.messages.iter())
        .cloned()
        .collect();
    assert_eq!(result.messages, expected);
    assert!(result.messages.iter().any(|m| m.contains("113/22")));
}
