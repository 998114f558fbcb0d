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

//! Core value types of a liturgical calendar.

mod enums;
mod event;
mod serde;
mod settings;

use chrono::NaiveDate;

pub use crate::calendar::{
    enums::{
        CalendarLayer, GradeClass, LitColor, LitEventType, LitGrade, LitSeason, LiturgicalCycle,
    },
    event::LiturgicalEvent,
    settings::{
        AscensionRule, CalendarDefaults, CalendarSettings, CorpusChristiRule, EpiphanyRule,
        Jurisdiction, ResolvedSettings, YearType,
    },
};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}
