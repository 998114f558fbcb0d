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

//! Static ranks of the Proper of Time.
//!
//! The grade of a Proper of Time celebration is canon, not configuration, so it is never read
//! from a resource. Resources only supply the localized names.

use crate::calendar::{LitColor, LitEventType, LitGrade};
use LitEventType::{Fixed, Mobile};
use LitGrade::{FeastOfTheLord, HigherSolemnity, Solemnity};

/// Rank and colours of a Proper of Time key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProperOfTimeEntry {
    pub key: &'static str,
    pub grade: LitGrade,
    pub color: &'static [LitColor],
    pub event_type: LitEventType,
}

const WHITE: &[LitColor] = &[LitColor::White];
const RED: &[LitColor] = &[LitColor::Red];
const GREEN: &[LitColor] = &[LitColor::Green];
const PURPLE: &[LitColor] = &[LitColor::Purple];
const ROSE: &[LitColor] = &[LitColor::Rose, LitColor::Purple];

const fn entry(
    key: &'static str,
    grade: LitGrade,
    color: &'static [LitColor],
    event_type: LitEventType,
) -> ProperOfTimeEntry {
    ProperOfTimeEntry {
        key,
        grade,
        color,
        event_type,
    }
}

/// Every Proper of Time key other than the Sundays of Ordinary Time.
pub const PROPER_OF_TIME: &[ProperOfTimeEntry] = &[
    entry("Christmas", HigherSolemnity, WHITE, Fixed),
    entry("Epiphany", HigherSolemnity, WHITE, Mobile),
    entry("AshWednesday", HigherSolemnity, PURPLE, Mobile),
    entry("PalmSun", HigherSolemnity, RED, Mobile),
    entry("MonHolyWeek", HigherSolemnity, PURPLE, Mobile),
    entry("TueHolyWeek", HigherSolemnity, PURPLE, Mobile),
    entry("WedHolyWeek", HigherSolemnity, PURPLE, Mobile),
    entry("HolyThurs", HigherSolemnity, WHITE, Mobile),
    entry("GoodFri", HigherSolemnity, RED, Mobile),
    entry("EasterVigil", HigherSolemnity, WHITE, Mobile),
    entry("Easter", HigherSolemnity, WHITE, Mobile),
    entry("MonOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("TueOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("WedOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("ThuOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("FriOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("SatOctaveEaster", HigherSolemnity, WHITE, Mobile),
    entry("Ascension", HigherSolemnity, WHITE, Mobile),
    entry("Pentecost", HigherSolemnity, RED, Mobile),
    entry("Advent1", Solemnity, PURPLE, Mobile),
    entry("Advent2", Solemnity, PURPLE, Mobile),
    entry("Advent3", Solemnity, ROSE, Mobile),
    entry("Advent4", Solemnity, PURPLE, Mobile),
    entry("Lent1", Solemnity, PURPLE, Mobile),
    entry("Lent2", Solemnity, PURPLE, Mobile),
    entry("Lent3", Solemnity, PURPLE, Mobile),
    entry("Lent4", Solemnity, ROSE, Mobile),
    entry("Lent5", Solemnity, PURPLE, Mobile),
    entry("Easter2", Solemnity, WHITE, Mobile),
    entry("Easter3", Solemnity, WHITE, Mobile),
    entry("Easter4", Solemnity, WHITE, Mobile),
    entry("Easter5", Solemnity, WHITE, Mobile),
    entry("Easter6", Solemnity, WHITE, Mobile),
    entry("Easter7", Solemnity, WHITE, Mobile),
    entry("Trinity", Solemnity, WHITE, Mobile),
    entry("CorpusChristi", Solemnity, WHITE, Mobile),
    entry("SacredHeart", Solemnity, WHITE, Mobile),
    entry("ChristKing", Solemnity, WHITE, Mobile),
    entry("MotherGod", Solemnity, WHITE, Fixed),
    entry("HolyFamily", FeastOfTheLord, WHITE, Mobile),
    entry("BaptismLord", FeastOfTheLord, WHITE, Mobile),
    entry("Christmas2", FeastOfTheLord, WHITE, Mobile),
];

/// Solemnities of the Lord or of the Blessed Virgin Mary.
///
/// The Sanctorale keys only take effect when the Missal in use defines them.
pub const LORD_OR_BVM: &[&str] = &[
    "Easter",
    "Christmas",
    "Epiphany",
    "Ascension",
    "Pentecost",
    "Trinity",
    "CorpusChristi",
    "ChristKing",
    "MotherGod",
    "Annunciation",
    "Assumption",
    "ImmaculateConception",
];

/// Return the Proper of Time entry of `key`, if `key` belongs to the Proper of Time.
///
/// # Examples
/// ```rust
/// # use litcal::proper::proper_of_time_entry;
/// # use litcal::LitGrade;
/// assert_eq!(proper_of_time_entry("Easter").unwrap().grade, LitGrade::HigherSolemnity);
/// assert_eq!(proper_of_time_entry("OrdSunday14").unwrap().grade, LitGrade::FeastOfTheLord);
/// assert!(proper_of_time_entry("StJoseph").is_none());
/// ```
pub fn proper_of_time_entry(key: &str) -> Option<ProperOfTimeEntry> {
    if let Some(entry) = PROPER_OF_TIME.iter().find(|e| e.key == key) {
        return Some(*entry);
    }
    match key.strip_prefix("OrdSunday").map(str::parse::<u32>) {
        Some(Ok(n)) if (2..=34).contains(&n) => Some(ProperOfTimeEntry {
            key: "OrdSunday",
            grade: FeastOfTheLord,
            color: GREEN,
            event_type: Mobile,
        }),
        _ => None,
    }
}

/// Returns *true* if `key` is a Solemnity of the Lord or of the Blessed Virgin Mary.
pub fn is_lord_or_bvm(key: &str) -> bool {
    LORD_OR_BVM.contains(&key)
}
