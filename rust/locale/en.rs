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

//! English strings.

use crate::locale::LocaleTable;

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub(crate) static TABLE: LocaleTable = LocaleTable {
    grades: [
        "weekday",
        "Commemoration",
        "Optional memorial",
        "Memorial",
        "FEAST",
        "FEAST OF THE LORD",
        "SOLEMNITY",
        "celebration with precedence over solemnities",
    ],
    grade_abbr: ["w", "m*", "m", "M", "F", "F", "S", "S"],
    seasons: [
        "Advent",
        "Christmas",
        "Lent",
        "Easter Triduum",
        "Easter",
        "Ordinary Time",
    ],
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    ordinal,
    vigil: "{name} Vigil Mass",
    cycle: "YEAR {letter}",
    date: "{month} {day}",
    advent_weekday: "{weekday} of the {ordinal} Week of Advent",
    advent_dec: "Advent Weekday: {date}",
    christmas_octave: "{ordinal} Day in the Octave of Christmas",
    before_epiphany: "{weekday} before the Epiphany, {date}",
    after_epiphany: "{weekday} after the Epiphany, {date}",
    after_ash_wednesday: "{weekday} after Ash Wednesday",
    lent_weekday: "{weekday} of the {ordinal} Week of Lent",
    easter_weekday: "{weekday} of the {ordinal} Week of Easter",
    ordinary_weekday: "{weekday} of the {ordinal} Week of Ordinary Time",
};
