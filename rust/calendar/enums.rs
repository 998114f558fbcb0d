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

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Ordinal rank of a liturgical event.
///
/// The discriminants are the wire values used by calendar resources and every comparison
/// between events uses the derived total order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LitGrade {
    Weekday = 0,
    Commemoration = 1,
    OptionalMemorial = 2,
    Memorial = 3,
    Feast = 4,
    FeastOfTheLord = 5,
    Solemnity = 6,
    /// Celebrations of the Proper of Time which take precedence over any solemnity.
    HigherSolemnity = 7,
}

/// The grade index an event belongs to, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GradeClass {
    Solemnity,
    Feast,
    Memorial,
}

impl LitGrade {
    /// Return the grade index class of the grade.
    ///
    /// Feasts of the Lord are grouped with solemnities since they replace Sundays and may
    /// carry First Vespers.
    pub fn class(&self) -> Option<GradeClass> {
        match self {
            LitGrade::FeastOfTheLord | LitGrade::Solemnity | LitGrade::HigherSolemnity => {
                Some(GradeClass::Solemnity)
            }
            LitGrade::Feast => Some(GradeClass::Feast),
            LitGrade::Memorial => Some(GradeClass::Memorial),
            LitGrade::Weekday | LitGrade::Commemoration | LitGrade::OptionalMemorial => None,
        }
    }
}

impl TryFrom<u8> for LitGrade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LitGrade::Weekday),
            1 => Ok(LitGrade::Commemoration),
            2 => Ok(LitGrade::OptionalMemorial),
            3 => Ok(LitGrade::Memorial),
            4 => Ok(LitGrade::Feast),
            5 => Ok(LitGrade::FeastOfTheLord),
            6 => Ok(LitGrade::Solemnity),
            7 => Ok(LitGrade::HigherSolemnity),
            _ => Err(format!("'{}' is not a valid liturgical grade (0..=7).", value)),
        }
    }
}

impl From<LitGrade> for u8 {
    fn from(grade: LitGrade) -> Self {
        grade as u8
    }
}

/// Liturgical colour of an observance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitColor {
    White,
    Red,
    Green,
    Purple,
    Rose,
    Black,
}

/// Whether an event keeps the same civil date every year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitEventType {
    Fixed,
    Mobile,
}

/// Liturgical season, assigned by date range against the season anchors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LitSeason {
    Advent,
    Christmas,
    Lent,
    EasterTriduum,
    Easter,
    OrdinaryTime,
}

/// Lectionary cycle label of an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiturgicalCycle {
    SundayA,
    SundayB,
    SundayC,
    WeekdayI,
    WeekdayII,
}

impl LiturgicalCycle {
    /// Three year Sunday cycle keyed on `index mod 3`.
    pub fn sunday(index: i32) -> Self {
        match index.rem_euclid(3) {
            0 => LiturgicalCycle::SundayA,
            1 => LiturgicalCycle::SundayB,
            _ => LiturgicalCycle::SundayC,
        }
    }

    /// Two year weekday cycle keyed on `index mod 2`.
    pub fn weekday(index: i32) -> Self {
        match index.rem_euclid(2) {
            0 => LiturgicalCycle::WeekdayI,
            _ => LiturgicalCycle::WeekdayII,
        }
    }

    /// The bare cycle letter(s).
    pub fn letter(&self) -> &'static str {
        match self {
            LiturgicalCycle::SundayA => "A",
            LiturgicalCycle::SundayB => "B",
            LiturgicalCycle::SundayC => "C",
            LiturgicalCycle::WeekdayI => "I",
            LiturgicalCycle::WeekdayII => "II",
        }
    }
}

impl fmt::Display for LiturgicalCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Source layer of an item, in increasing order of precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarLayer {
    GeneralRoman,
    WiderRegion,
    National,
    Diocesan,
}

impl fmt::Display for CalendarLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalendarLayer::GeneralRoman => "General Roman",
            CalendarLayer::WiderRegion => "wider region",
            CalendarLayer::National => "national",
            CalendarLayer::Diocesan => "diocesan",
        };
        write!(f, "{}", s)
    }
}
