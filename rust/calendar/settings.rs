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

/// Whether a computation spans a civil or a liturgical year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YearType {
    /// January 1 to December 31.
    #[default]
    Civil,
    /// First Sunday of Advent of the previous year to the Saturday before the First Sunday of
    /// Advent of the requested year.
    Liturgical,
}

/// Date rule of the Epiphany.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EpiphanyRule {
    #[default]
    Jan6,
    SundayJan2Jan8,
}

/// Date rule of the Ascension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AscensionRule {
    #[default]
    Thursday,
    Sunday,
}

/// Date rule of Corpus Christi.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorpusChristiRule {
    #[default]
    Thursday,
    Sunday,
}

/// The calendar being requested.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// The General Roman Calendar.
    #[default]
    General,
    National { id: String },
    Diocesan { id: String },
}

/// Caller settings of a computation.
///
/// Only `year` is required. Rules left as `None` take the defaults of the requested national
/// calendar, if any, and otherwise those of the General Roman Calendar.
///
/// # Examples
/// ```rust
/// # use litcal::{CalendarSettings, Jurisdiction, JSON};
/// let settings = CalendarSettings::from_json(r#"{"year": 2024, "locale": "it"}"#).unwrap();
/// assert_eq!(settings.year, 2024);
/// assert_eq!(settings.calendar, Jurisdiction::General);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    pub year: i32,
    #[serde(default)]
    pub year_type: YearType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epiphany: Option<EpiphanyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascension: Option<AscensionRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_christi: Option<CorpusChristiRule>,
    #[serde(default)]
    pub calendar: Jurisdiction,
}

/// Defaults published by a national calendar, each overridable by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalendarDefaults {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub epiphany: Option<EpiphanyRule>,
    #[serde(default)]
    pub ascension: Option<AscensionRule>,
    #[serde(default)]
    pub corpus_christi: Option<CorpusChristiRule>,
}

/// Settings with every rule decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSettings {
    pub year: i32,
    pub year_type: YearType,
    pub locale: String,
    pub epiphany: EpiphanyRule,
    pub ascension: AscensionRule,
    pub corpus_christi: CorpusChristiRule,
    pub calendar: Jurisdiction,
}

impl CalendarSettings {
    /// Create settings for the General Roman Calendar of a civil year.
    pub fn new(year: i32) -> Self {
        CalendarSettings {
            year,
            year_type: YearType::Civil,
            locale: None,
            epiphany: None,
            ascension: None,
            corpus_christi: None,
            calendar: Jurisdiction::General,
        }
    }

    /// Decide every rule, giving precedence to explicit caller values over `defaults`.
    pub fn resolve(&self, defaults: &CalendarDefaults) -> ResolvedSettings {
        ResolvedSettings {
            year: self.year,
            year_type: self.year_type,
            locale: self
                .locale
                .clone()
                .or_else(|| defaults.locale.clone())
                .unwrap_or_else(|| "en".to_string()),
            epiphany: self.epiphany.or(defaults.epiphany).unwrap_or_default(),
            ascension: self.ascension.or(defaults.ascension).unwrap_or_default(),
            corpus_christi: self
                .corpus_christi
                .or(defaults.corpus_christi)
                .unwrap_or_default(),
            calendar: self.calendar.clone(),
        }
    }
}

impl ResolvedSettings {
    /// Return a copy of the settings for a different civil `year`.
    pub(crate) fn with_year(&self, year: i32) -> Self {
        ResolvedSettings {
            year,
            ..self.clone()
        }
    }
}
