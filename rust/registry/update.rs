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

//! Typed mutations of live events.
//!
//! Every settable field has its own variant of [`EventUpdate`] and its own registry method.
//! A method fails with [`UpdateError`] when the key is not live or when the field already holds
//! the requested value, and never touches the registry in that case.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{LitColor, LitGrade, LitSeason, LiturgicalCycle};
use crate::error::UpdateError;
use crate::registry::EventRegistry;

/// Vesper and vigil flags of an event. `None` leaves a flag as it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct VesperFlags {
    pub has_vigil_mass: Option<bool>,
    pub has_vesper_i: Option<bool>,
    pub has_vesper_ii: Option<bool>,
}

impl VesperFlags {
    /// Set all three flags to `value`.
    pub fn all(value: bool) -> Self {
        VesperFlags {
            has_vigil_mass: Some(value),
            has_vesper_i: Some(value),
            has_vesper_ii: Some(value),
        }
    }

    /// Only set Second Vespers.
    pub fn vesper_ii(value: bool) -> Self {
        VesperFlags {
            has_vesper_ii: Some(value),
            ..VesperFlags::default()
        }
    }
}

/// A single typed change to a live event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventUpdate {
    Grade(LitGrade),
    Name(String),
    Date(NaiveDate),
    Color(Vec<LitColor>),
    Common(Vec<String>),
    Patron(bool),
    Missal(String),
    Decree(String),
    VesperFlags(VesperFlags),
    PsalterWeek(u8),
    Season(LitSeason),
    Cycle(LiturgicalCycle),
}

fn unchanged(key: &str, property: &'static str) -> UpdateError {
    UpdateError::Unchanged {
        key: key.to_string(),
        property,
    }
}

/// Set a field of `event` to `value`, failing if it already holds that value.
macro_rules! set_field {
    ($event:expr, $key:expr, $field:ident, $value:expr) => {{
        let value = $value;
        if $event.$field == value {
            return Err(unchanged($key, stringify!($field)));
        }
        $event.$field = value;
        Ok(())
    }};
}

impl EventRegistry<'_> {
    /// Apply any [`EventUpdate`] to the live event `key`.
    pub fn apply(&mut self, key: &str, update: EventUpdate) -> Result<(), UpdateError> {
        match update {
            EventUpdate::Grade(grade) => self.set_grade(key, grade),
            EventUpdate::Name(name) => self.set_name(key, name),
            EventUpdate::Date(date) => self.move_event(key, date),
            EventUpdate::Color(color) => self.set_color(key, color),
            EventUpdate::Common(common) => self.set_common(key, common),
            EventUpdate::Patron(is_patron) => self.set_patron(key, is_patron),
            EventUpdate::Missal(missal) => self.set_missal(key, missal),
            EventUpdate::Decree(decree) => self.set_decree(key, decree),
            EventUpdate::VesperFlags(flags) => self.set_vesper_flags(key, flags),
            EventUpdate::PsalterWeek(week) => self.set_psalter_week(key, week),
            EventUpdate::Season(season) => self.set_season(key, season),
            EventUpdate::Cycle(cycle) => self.set_cycle(key, cycle),
        }
    }

    /// Change the grade of `key`, migrating it between grade indices and refreshing the
    /// localized grade name and abbreviation.
    pub fn set_grade(&mut self, key: &str, grade: LitGrade) -> Result<(), UpdateError> {
        let l10n = self.l10n();
        let event = self.live_mut(key)?;
        let old = event.grade;
        if old == grade {
            return Err(unchanged(key, "grade"));
        }
        event.grade = grade;
        event.grade_lcl = l10n.grade(grade).to_string();
        event.grade_abbr = l10n.grade_abbr(grade).to_string();
        self.migrate_grade_index(key, old, grade);
        Ok(())
    }

    pub fn set_name(&mut self, key: &str, name: String) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, name, name)
    }

    /// Move `key` to a new date.
    pub fn move_event(&mut self, key: &str, date: NaiveDate) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        debug!(key, from = %event.date, to = %date, "moving event");
        set_field!(event, key, date, date)
    }

    pub fn set_color(&mut self, key: &str, color: Vec<LitColor>) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, color, color)
    }

    pub fn set_common(&mut self, key: &str, common: Vec<String>) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, common, common)
    }

    pub fn set_patron(&mut self, key: &str, is_patron: bool) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, is_patron, is_patron)
    }

    pub fn set_missal(&mut self, key: &str, missal: String) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, missal, Some(missal))
    }

    pub fn set_decree(&mut self, key: &str, decree: String) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, decree, Some(decree))
    }

    /// Set the flags of `flags` which are not `None`.
    pub fn set_vesper_flags(&mut self, key: &str, flags: VesperFlags) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        let next = (
            flags.has_vigil_mass.or(event.has_vigil_mass),
            flags.has_vesper_i.or(event.has_vesper_i),
            flags.has_vesper_ii.or(event.has_vesper_ii),
        );
        if next == (event.has_vigil_mass, event.has_vesper_i, event.has_vesper_ii) {
            return Err(unchanged(key, "vesper_flags"));
        }
        (event.has_vigil_mass, event.has_vesper_i, event.has_vesper_ii) = next;
        Ok(())
    }

    pub fn set_psalter_week(&mut self, key: &str, week: u8) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, psalter_week, Some(week))
    }

    pub fn set_season(&mut self, key: &str, season: LitSeason) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, liturgical_season, Some(season))
    }

    pub fn set_cycle(&mut self, key: &str, cycle: LiturgicalCycle) -> Result<(), UpdateError> {
        let event = self.live_mut(key)?;
        set_field!(event, key, liturgical_year, Some(cycle))
    }
}
