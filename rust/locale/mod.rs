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

//! Localization of grade names, weekday labels, dates and resolution messages.
//!
//! A [`LocalizationContext`] is built once per computation and passed by reference through
//! every phase. It holds no mutable state and is never shared between computations.

mod en;
mod it;
mod la;
mod messages;

pub use crate::locale::messages::{Subject, DECREE_2022};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::calendar::{LitGrade, LitSeason, LiturgicalCycle};

/// Static strings of a single locale.
pub(crate) struct LocaleTable {
    pub grades: [&'static str; 8],
    pub grade_abbr: [&'static str; 8],
    pub seasons: [&'static str; 6],
    /// Monday first.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub ordinal: fn(u32) -> String,
    /// Placeholders: `{name}`.
    pub vigil: &'static str,
    /// Placeholders: `{letter}`.
    pub cycle: &'static str,
    /// Placeholders: `{day}`, `{month}`.
    pub date: &'static str,
    /// Placeholders: `{weekday}`, `{ordinal}`, `{date}`.
    pub advent_weekday: &'static str,
    pub advent_dec: &'static str,
    pub christmas_octave: &'static str,
    pub before_epiphany: &'static str,
    pub after_epiphany: &'static str,
    pub after_ash_wednesday: &'static str,
    pub lent_weekday: &'static str,
    pub easter_weekday: &'static str,
    pub ordinary_weekday: &'static str,
}

/// Label of a generated weekday placeholder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WeekdayLabel {
    Advent { week: u32 },
    AdventDecember,
    ChristmasOctave { day: u32 },
    BeforeEpiphany,
    AfterEpiphany,
    AfterAshWednesday,
    Lent { week: u32 },
    Easter { week: u32 },
    Ordinary { week: u32 },
}

/// Locale dependent strings for one computation.
///
/// # Notes
/// Built-in tables exist for `en`, `it` and `la`. Regional variants such as `en_US` or
/// `it-IT` use their language table. Any other locale falls back to English with a warning.
#[derive(Debug, Clone)]
pub struct LocalizationContext {
    locale: String,
    table: &'static LocaleTable,
}

impl std::fmt::Debug for LocaleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleTable").field("vigil", &self.vigil).finish()
    }
}

impl LocalizationContext {
    /// Create the localization context of `locale`.
    pub fn new(locale: &str) -> Self {
        let language = locale
            .split(['_', '-'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        let table = match language.as_str() {
            "en" => &en::TABLE,
            "it" => &it::TABLE,
            "la" => &la::TABLE,
            _ => {
                warn!(locale, "no built-in localization for locale, falling back to `en`");
                &en::TABLE
            }
        };
        LocalizationContext {
            locale: locale.to_string(),
            table,
        }
    }

    /// The requested locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn grade(&self, grade: LitGrade) -> &'static str {
        self.table.grades[grade as usize]
    }

    pub fn grade_abbr(&self, grade: LitGrade) -> &'static str {
        self.table.grade_abbr[grade as usize]
    }

    pub fn season(&self, season: LitSeason) -> &'static str {
        let i = match season {
            LitSeason::Advent => 0,
            LitSeason::Christmas => 1,
            LitSeason::Lent => 2,
            LitSeason::EasterTriduum => 3,
            LitSeason::Easter => 4,
            LitSeason::OrdinaryTime => 5,
        };
        self.table.seasons[i]
    }

    pub fn weekday(&self, weekday: Weekday) -> &'static str {
        self.table.weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Month name, `month` in `1..=12`.
    pub fn month(&self, month: u32) -> &'static str {
        self.table.months[(month.clamp(1, 12) - 1) as usize]
    }

    pub fn ordinal(&self, n: u32) -> String {
        (self.table.ordinal)(n)
    }

    /// Format a date as day and month, e.g. "August 14".
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.table
            .date
            .replace("{day}", &date.day().to_string())
            .replace("{month}", self.month(date.month()))
    }

    /// Name of the Vigil Mass of an event called `name`.
    pub fn vigil_name(&self, name: &str) -> String {
        self.table.vigil.replace("{name}", name)
    }

    pub fn cycle_label(&self, cycle: LiturgicalCycle) -> String {
        self.table.cycle.replace("{letter}", cycle.letter())
    }

    /// Name of a generated weekday placeholder falling on `date`.
    pub fn weekday_name(&self, label: WeekdayLabel, date: NaiveDate) -> String {
        let (template, ordinal) = match label {
            WeekdayLabel::Advent { week } => (self.table.advent_weekday, self.ordinal(week)),
            WeekdayLabel::AdventDecember => (self.table.advent_dec, String::new()),
            WeekdayLabel::ChristmasOctave { day } => {
                (self.table.christmas_octave, self.ordinal(day))
            }
            WeekdayLabel::BeforeEpiphany => (self.table.before_epiphany, String::new()),
            WeekdayLabel::AfterEpiphany => (self.table.after_epiphany, String::new()),
            WeekdayLabel::AfterAshWednesday => (self.table.after_ash_wednesday, String::new()),
            WeekdayLabel::Lent { week } => (self.table.lent_weekday, self.ordinal(week)),
            WeekdayLabel::Easter { week } => (self.table.easter_weekday, self.ordinal(week)),
            WeekdayLabel::Ordinary { week } => (self.table.ordinary_weekday, self.ordinal(week)),
        };
        template
            .replace("{weekday}", self.weekday(date.weekday()))
            .replace("{ordinal}", &ordinal)
            .replace("{date}", &self.format_date(date))
    }
}

pub(crate) fn roman(n: u32) -> String {
    // week numbers never exceed 34
    const NUMERALS: [(u32, &str); 6] = [
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut n = n;
    let mut s = String::new();
    for (value, numeral) in NUMERALS.iter() {
        while n >= *value {
            s.push_str(numeral);
            n -= value;
        }
    }
    s
}
