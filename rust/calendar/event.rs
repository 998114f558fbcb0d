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

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{LitColor, LitEventType, LitGrade, LitSeason, LiturgicalCycle};

/// A single observance on a single calendar date.
///
/// Instances are owned by exactly one [`EventRegistry`](crate::registry::EventRegistry). Fields
/// are only readable from outside the crate; every mutation passes through the registry so that
/// its indices remain consistent with the event data.
///
/// # Notes
/// The optional fields are derived by later phases of a computation and are `None` until the
/// phase that owns them has run. `is_vigil_for` is a key, never a reference, to the target event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiturgicalEvent {
    #[serde(rename = "event_key")]
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) date: NaiveDate,
    pub(crate) color: Vec<LitColor>,
    #[serde(rename = "type")]
    pub(crate) event_type: LitEventType,
    pub(crate) grade: LitGrade,
    #[serde(default)]
    pub(crate) grade_lcl: String,
    #[serde(default)]
    pub(crate) grade_abbr: String,
    #[serde(default)]
    pub(crate) common: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) missal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) decree: Option<String>,
    #[serde(default)]
    pub(crate) is_patron: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) psalter_week: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) is_vigil_mass: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) has_vigil_mass: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) has_vesper_i: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) has_vesper_ii: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) is_vigil_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) liturgical_year: Option<LiturgicalCycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) liturgical_season: Option<LitSeason>,
}

impl LiturgicalEvent {
    /// Create a new event with none of the derived fields populated.
    ///
    /// Localized grade names are attached when the event is added to a registry.
    pub fn new(
        key: &str,
        name: &str,
        date: NaiveDate,
        color: Vec<LitColor>,
        event_type: LitEventType,
        grade: LitGrade,
        common: Vec<String>,
    ) -> Self {
        LiturgicalEvent {
            key: key.to_string(),
            name: name.to_string(),
            date,
            color,
            event_type,
            grade,
            grade_lcl: String::new(),
            grade_abbr: String::new(),
            common,
            missal: None,
            decree: None,
            is_patron: false,
            psalter_week: None,
            is_vigil_mass: None,
            has_vigil_mass: None,
            has_vesper_i: None,
            has_vesper_ii: None,
            is_vigil_for: None,
            liturgical_year: None,
            liturgical_season: None,
        }
    }

    /// Create the Vigil Mass of `self`, dated one day earlier.
    ///
    /// Colour, type, grade, commons, season and cycle are copied from the source event.
    pub(crate) fn vigil(&self, name: String) -> Self {
        let mut vigil = LiturgicalEvent::new(
            &format!("{}_vigil", self.key),
            &name,
            self.date.pred_opt().unwrap_or(self.date),
            self.color.clone(),
            self.event_type,
            self.grade,
            self.common.clone(),
        );
        vigil.grade_lcl = self.grade_lcl.clone();
        vigil.grade_abbr = self.grade_abbr.clone();
        vigil.liturgical_year = self.liturgical_year;
        vigil.liturgical_season = self.liturgical_season;
        vigil.is_vigil_mass = Some(true);
        vigil.is_vigil_for = Some(self.key.clone());
        vigil
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn color(&self) -> &[LitColor] {
        &self.color
    }

    pub fn event_type(&self) -> LitEventType {
        self.event_type
    }

    pub fn grade(&self) -> LitGrade {
        self.grade
    }

    /// Localized grade name.
    pub fn grade_lcl(&self) -> &str {
        &self.grade_lcl
    }

    /// Localized grade abbreviation.
    pub fn grade_abbr(&self) -> &str {
        &self.grade_abbr
    }

    pub fn common(&self) -> &[String] {
        &self.common
    }

    /// Missal edition which introduced or last updated the event.
    pub fn missal(&self) -> Option<&str> {
        self.missal.as_deref()
    }

    /// Decree legislating the event, if any.
    pub fn decree(&self) -> Option<&str> {
        self.decree.as_deref()
    }

    pub fn is_patron(&self) -> bool {
        self.is_patron
    }

    pub fn psalter_week(&self) -> Option<u8> {
        self.psalter_week
    }

    /// Returns *true* only for events created as a Vigil Mass.
    pub fn is_vigil_mass(&self) -> bool {
        self.is_vigil_mass.unwrap_or(false)
    }

    pub fn has_vigil_mass(&self) -> Option<bool> {
        self.has_vigil_mass
    }

    pub fn has_vesper_i(&self) -> Option<bool> {
        self.has_vesper_i
    }

    pub fn has_vesper_ii(&self) -> Option<bool> {
        self.has_vesper_ii
    }

    /// Key of the event this Vigil Mass anticipates.
    pub fn is_vigil_for(&self) -> Option<&str> {
        self.is_vigil_for.as_deref()
    }

    pub fn liturgical_year(&self) -> Option<LiturgicalCycle> {
        self.liturgical_year
    }

    pub fn liturgical_season(&self) -> Option<LitSeason> {
        self.liturgical_season
    }

    /// Returns *true* if the event falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::nd;

    fn fixture_event() -> LiturgicalEvent {
        LiturgicalEvent::new(
            "Assumption",
            "Assumption of the Blessed Virgin Mary",
            nd(2024, 8, 15),
            vec![LitColor::White],
            LitEventType::Fixed,
            LitGrade::Solemnity,
            vec![],
        )
    }

    #[test]
    fn test_new_has_no_derived_fields() {
        let event = fixture_event();
        assert_eq!(event.psalter_week(), None);
        assert_eq!(event.has_vigil_mass(), None);
        assert!(!event.is_vigil_mass());
        assert!(!event.is_sunday());
    }

    #[test]
    fn test_vigil_is_day_before() {
        let mut event = fixture_event();
        event.liturgical_season = Some(LitSeason::OrdinaryTime);
        event.liturgical_year = Some(LiturgicalCycle::SundayB);
        let vigil = event.vigil("Assumption Vigil Mass".to_string());
        assert_eq!(vigil.key(), "Assumption_vigil");
        assert_eq!(vigil.date(), nd(2024, 8, 14));
        assert_eq!(vigil.grade(), LitGrade::Solemnity);
        assert_eq!(vigil.is_vigil_for(), Some("Assumption"));
        assert!(vigil.is_vigil_mass());
        assert_eq!(vigil.liturgical_season(), Some(LitSeason::OrdinaryTime));
        assert_eq!(vigil.liturgical_year(), Some(LiturgicalCycle::SundayB));
    }
}
