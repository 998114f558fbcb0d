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

//! Templates of the messages recorded while computing a calendar.
//!
//! Message sentences are English. Names, grades, seasons and dates inside them are localized.

use chrono::NaiveDate;

use crate::calendar::{CalendarLayer, LitGrade};
use crate::locale::LocalizationContext;

/// The citation of the decree resolving the vigil coincidences of 2022.
pub const DECREE_2022: &str = "Prot. N. 113/22";

/// One side of a message: a named event with its localized grade label.
#[derive(Debug, Copy, Clone)]
pub struct Subject<'a> {
    pub grade: &'a str,
    pub name: &'a str,
}

impl LocalizationContext {
    pub fn msg_skipped(
        &self,
        event: Subject<'_>,
        date: NaiveDate,
        by: Subject<'_>,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}', usually celebrated on {}, is suppressed by the {} '{}' in the year {}.",
            event.grade,
            event.name,
            self.format_date(date),
            by.grade,
            by.name,
            year
        )
    }

    pub fn msg_transferred(
        &self,
        event: Subject<'_>,
        by: Subject<'_>,
        to: NaiveDate,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' falls on the {} '{}' in the year {}, the celebration has been transferred to {}.",
            event.grade,
            event.name,
            by.grade,
            by.name,
            year,
            self.format_date(to)
        )
    }

    pub fn msg_replaced(
        &self,
        event: Subject<'_>,
        replaced: Subject<'_>,
        date: NaiveDate,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' takes the place of the {} '{}' on {} in the year {}.",
            event.grade,
            event.name,
            replaced.grade,
            replaced.name,
            self.format_date(date),
            year
        )
    }

    pub fn msg_coincides(
        &self,
        event: Subject<'_>,
        other: Subject<'_>,
        date: NaiveDate,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' coincides with the {} '{}' on {} in the year {}.",
            event.grade,
            event.name,
            other.grade,
            other.name,
            self.format_date(date),
            year
        )
    }

    pub fn msg_nativity_john_baptist_2022(&self, name: &str, date: NaiveDate) -> String {
        format!(
            "In the year 2022 the {} '{}' coincides with the Solemnity of the Most Sacred Heart of Jesus and is anticipated to {} ({}).",
            self.grade(LitGrade::Solemnity),
            name,
            self.format_date(date),
            DECREE_2022
        )
    }

    pub fn msg_created(
        &self,
        layer: CalendarLayer,
        event: Subject<'_>,
        date: NaiveDate,
        decree: Option<&str>,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' has been added on {} by the {} calendar{}, applicable to the year {}.",
            event.grade,
            event.name,
            self.format_date(date),
            layer,
            decree_suffix(decree),
            year
        )
    }

    pub fn msg_exists(&self, layer: CalendarLayer, key: &str, year: i32) -> String {
        format!(
            "The {} calendar tried to create the event '{}' in the year {}, but it already exists.",
            layer, key, year
        )
    }

    pub fn msg_missing(&self, layer: CalendarLayer, key: &str, year: i32) -> String {
        format!(
            "The {} calendar refers to the event '{}' which does not exist in the year {}.",
            layer, key, year
        )
    }

    pub fn msg_grade_changed(
        &self,
        layer: CalendarLayer,
        name: &str,
        from: LitGrade,
        to: LitGrade,
        decree: Option<&str>,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' has been changed to a {} by the {} calendar{}, applicable to the year {}.",
            self.grade(from),
            name,
            self.grade(to),
            layer,
            decree_suffix(decree),
            year
        )
    }

    pub fn msg_name_changed(
        &self,
        layer: CalendarLayer,
        from: &str,
        to: &str,
        decree: Option<&str>,
        year: i32,
    ) -> String {
        format!(
            "The name of '{}' has been changed to '{}' by the {} calendar{}, applicable to the year {}.",
            from,
            to,
            layer,
            decree_suffix(decree),
            year
        )
    }

    pub fn msg_patron(&self, layer: CalendarLayer, event: Subject<'_>, year: i32) -> String {
        format!(
            "The {} '{}' is celebrated as a patron by the {} calendar in the year {}.",
            event.grade, event.name, layer, year
        )
    }

    pub fn msg_moved(
        &self,
        layer: CalendarLayer,
        event: Subject<'_>,
        from: NaiveDate,
        to: NaiveDate,
        decree: Option<&str>,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' has been moved from {} to {} by the {} calendar{}, applicable to the year {}.",
            event.grade,
            event.name,
            self.format_date(from),
            self.format_date(to),
            layer,
            decree_suffix(decree),
            year
        )
    }

    pub fn msg_suppressed(
        &self,
        layer: CalendarLayer,
        event: Subject<'_>,
        decree: Option<&str>,
        year: i32,
    ) -> String {
        format!(
            "The {} '{}' has been suppressed by the {} calendar{}, applicable to the year {}.",
            event.grade,
            event.name,
            layer,
            decree_suffix(decree),
            year
        )
    }

    pub fn msg_reinstated(&self, layer: CalendarLayer, event: Subject<'_>, year: i32) -> String {
        format!(
            "The {} '{}' has been reinstated by the {} calendar in the year {}.",
            event.grade, event.name, layer, year
        )
    }

    /// The coinciding celebration keeps its Second Vespers, the Vigil Mass is dropped.
    pub fn msg_vigil_yields(
        &self,
        source: Subject<'_>,
        coinciding: Subject<'_>,
        season: &str,
        year: i32,
    ) -> String {
        format!(
            "The Vigil Mass for the {} '{}' coincides with the {} '{}' ({}) in the year {}. \
             Since the {} '{}' has precedence, the {} '{}' will not have a Vigil Mass or Evening Prayer I.",
            source.grade,
            source.name,
            coinciding.grade,
            coinciding.name,
            season,
            year,
            coinciding.grade,
            coinciding.name,
            source.grade,
            source.name
        )
    }

    /// The Vigil Mass is kept and the coinciding celebration loses its Second Vespers.
    pub fn msg_vigil_prevails(
        &self,
        source: Subject<'_>,
        coinciding: Subject<'_>,
        season: &str,
        year: i32,
    ) -> String {
        format!(
            "The Vigil Mass for the {} '{}' coincides with the {} '{}' ({}) in the year {}. \
             Since the {} '{}' has precedence, it will have Evening Prayer I and a Vigil Mass, whereas the {} '{}' will not have Evening Prayer II.",
            source.grade,
            source.name,
            coinciding.grade,
            coinciding.name,
            season,
            year,
            source.grade,
            source.name,
            coinciding.grade,
            coinciding.name
        )
    }

    pub fn msg_vigil_decree_2022(
        &self,
        source: Subject<'_>,
        coinciding: Subject<'_>,
        season: &str,
    ) -> String {
        format!(
            "The Vigil Mass for the {} '{}' coincides with the {} '{}' ({}) in the year 2022. \
             As per the decree of the Dicastery for Divine Worship ({}), the {} '{}' has precedence and will have Evening Prayer I and a Vigil Mass, whereas the {} '{}' will not have Evening Prayer II.",
            source.grade,
            source.name,
            coinciding.grade,
            coinciding.name,
            season,
            DECREE_2022,
            source.grade,
            source.name,
            coinciding.grade,
            coinciding.name
        )
    }

    pub fn msg_vigil_unresolved(
        &self,
        source: Subject<'_>,
        coinciding: Subject<'_>,
        season: &str,
        year: i32,
    ) -> String {
        format!(
            "The Vigil Mass for the {} '{}' coincides with the {} '{}' ({}) in the year {}. \
             No rule of precedence resolves this coincidence.",
            source.grade, source.name, coinciding.grade, coinciding.name, season, year
        )
    }
}

fn decree_suffix(decree: Option<&str>) -> String {
    match decree {
        Some(url) => format!(" ({})", url),
        None => String::new(),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::nd;

    #[test]
    fn test_decree_message_cites_year_and_decree() {
        let l10n = LocalizationContext::new("en");
        let msg = l10n.msg_vigil_decree_2022(
            Subject {
                grade: "SOLEMNITY",
                name: "Most Sacred Heart of Jesus",
            },
            Subject {
                grade: "SOLEMNITY",
                name: "Nativity of Saint John the Baptist",
            },
            "Ordinary Time",
        );
        assert!(msg.contains("2022"));
        assert!(msg.contains(DECREE_2022));
    }

    #[test]
    fn test_created_message() {
        let l10n = LocalizationContext::new("en");
        let msg = l10n.msg_created(
            CalendarLayer::Diocesan,
            Subject {
                grade: "FEAST",
                name: "Holy Shroud",
            },
            nd(2024, 5, 4),
            None,
            2024,
        );
        assert_eq!(
            msg,
            "The FEAST 'Holy Shroud' has been added on May 4 by the diocesan calendar, applicable to the year 2024."
        );
    }
}
