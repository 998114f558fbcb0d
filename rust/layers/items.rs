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
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDefaults, LitColor, LitGrade};
use crate::proper::shift;
use crate::registry::EventRegistry;

/// A fixed-date record of a Missal's Sanctorale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SanctoraleRecord {
    pub tag: String,
    #[serde(default)]
    pub name: String,
    pub grade: LitGrade,
    pub color: Vec<LitColor>,
    #[serde(default)]
    pub common: Vec<String>,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decree: Option<String>,
}

/// A Missal edition with its Sanctorale and the optional translation of its names.
#[derive(Debug, Clone, PartialEq)]
pub struct Missal {
    pub edition: String,
    pub year_published: i32,
    pub records: Vec<SanctoraleRecord>,
    pub names: Option<IndexMap<String, String>>,
}

impl Missal {
    /// Create a Missal whose publication year is read from the trailing digits of `edition`.
    ///
    /// # Examples
    /// ```rust
    /// # use litcal::layers::Missal;
    /// let missal = Missal::new("EDITIO_TYPICA_TERTIA_2002", vec![], None);
    /// assert_eq!(missal.year_published, 2002);
    /// ```
    pub fn new(
        edition: &str,
        records: Vec<SanctoraleRecord>,
        names: Option<IndexMap<String, String>>,
    ) -> Self {
        Missal {
            edition: edition.to_string(),
            year_published: Missal::year_from_edition(edition).unwrap_or(i32::MAX),
            records,
            names,
        }
    }

    /// Parse the trailing digits of an edition identifier.
    pub fn year_from_edition(edition: &str) -> Option<i32> {
        let digits: String = edition
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect::<Vec<char>>()
            .into_iter()
            .rev()
            .collect();
        digits.parse().ok()
    }

    /// Returns *true* if the edition is in force in `year`.
    pub fn applies_to(&self, year: i32) -> bool {
        year >= self.year_published
    }

    /// Name of `tag` in the active locale, if translated.
    pub fn translated_name(&self, tag: &str) -> Option<&str> {
        self.names.as_ref()?.get(tag).map(|s| s.as_str())
    }
}

/// The festivity part of a layer item. Every field except the tag is optional and only the
/// fields relevant to the item's action are read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Festivity {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<LitColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<LitGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// `0` is Sunday, `6` is Saturday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u32>,
    /// `-1` is the last occurrence in the month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nth: Option<i32>,
}

/// The action of a layer item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerAction {
    CreateNew,
    SetProperty,
    MakePatron,
    MoveEvent,
    Suppress,
    Reinstate,
}

/// The property changed by a `setProperty` item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FestivityProperty {
    Name,
    Grade,
    Color,
    Common,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    pub action: LayerAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<FestivityProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_year: Option<i32>,
    #[serde(
        rename = "decreeURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub decree_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decree_langs: Option<IndexMap<String, String>>,
}

impl ItemMetadata {
    /// Returns *true* if `year` lies within the inclusive `sinceYear`..`untilYear` bounds.
    pub fn applies_to(&self, year: i32) -> bool {
        self.since_year.map_or(true, |since| year >= since)
            && self.until_year.map_or(true, |until| year <= until)
    }

    /// The decree URL for `locale`.
    ///
    /// A `%s` in the URL is replaced by the language code listed in `decreeLangs` for the
    /// locale's language, falling back to the `en` entry.
    pub fn decree(&self, locale: &str) -> Option<String> {
        let url = self.decree_url.as_ref()?;
        if !url.contains("%s") {
            return Some(url.clone());
        }
        let language = locale.split(['_', '-']).next().unwrap_or("en");
        let langs = self.decree_langs.as_ref();
        let code = langs
            .and_then(|l| l.get(language).or_else(|| l.get("en")))
            .map(|s| s.as_str())
            .unwrap_or("en");
        Some(url.replace("%s", code))
    }
}

/// One entry of a legislated-memorial list or of an override layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerItem {
    #[serde(rename = "Festivity")]
    pub festivity: Festivity,
    #[serde(rename = "Metadata")]
    pub metadata: ItemMetadata,
}

/// How a layer item places an event in the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRule {
    Fixed { month: u32, day: u32 },
    Relative { anchor: String, offset: i64 },
    NthWeekday { month: u32, weekday: Weekday, nth: i32 },
}

fn weekday_from_sunday(n: u32) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

impl Festivity {
    /// The date rule described by the festivity's fields, if any.
    ///
    /// `ANCHOR` takes precedence over `WEEKDAY`, which takes precedence over `DAY`.
    pub fn date_rule(&self) -> Option<DateRule> {
        if let Some(anchor) = &self.anchor {
            return Some(DateRule::Relative {
                anchor: anchor.clone(),
                offset: self.offset.unwrap_or(0),
            });
        }
        let month = self.month?;
        if let (Some(weekday), Some(nth)) = (self.weekday, self.nth) {
            return Some(DateRule::NthWeekday {
                month,
                weekday: weekday_from_sunday(weekday)?,
                nth,
            });
        }
        Some(DateRule::Fixed {
            month,
            day: self.day?,
        })
    }
}

impl DateRule {
    /// Resolve the rule in `year`. Relative rules read their anchor from the live events of
    /// `registry`. Returns `None` for impossible dates or absent anchors.
    pub fn resolve(&self, year: i32, registry: &EventRegistry<'_>) -> Option<NaiveDate> {
        match self {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, *month, *day),
            DateRule::Relative { anchor, offset } => registry
                .get_event(anchor)
                .map(|e| shift(e.date(), *offset)),
            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            } => {
                let first = NaiveDate::from_ymd_opt(year, *month, 1)?;
                if *nth > 0 {
                    let date = NaiveDate::from_weekday_of_month_opt(
                        year,
                        *month,
                        *weekday,
                        *nth as u8,
                    )?;
                    Some(date)
                } else if *nth == -1 {
                    let next_month = first.checked_add_months(chrono::Months::new(1))?;
                    let mut date = next_month.pred_opt()?;
                    while date.weekday() != *weekday {
                        date = date.pred_opt()?;
                    }
                    Some(date)
                } else {
                    None
                }
            }
        }
    }
}

/// Metadata of a wider-region, national or diocesan layer document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diocese: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wider_region: Option<String>,
    /// National Missals whose Sanctorale is applied after the General Roman Calendar.
    #[serde(default)]
    pub missals: Vec<String>,
    #[serde(default)]
    pub settings: CalendarDefaults,
}

/// A wider-region, national or diocesan calendar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerDocument {
    #[serde(default)]
    pub metadata: LayerMetadata,
    #[serde(default)]
    pub items: Vec<LayerItem>,
}
