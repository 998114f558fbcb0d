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

//! Calculation of the date of Easter.
//!
//! The Gregorian date follows the anonymous algorithm published by Meeus, Jones and Butcher.
//! The Julian date follows Meeus' Julian algorithm and may optionally be expressed on the civil
//! (Gregorian) calendar by adding the historical Julian to Gregorian day offset. The Julian
//! result is only ever an input to conflict detection, never an alternative output calendar.

use chrono::{Days, NaiveDate};

/// Return the date of Easter Sunday on the Gregorian calendar.
///
/// # Panics
/// Panics if `year` is not representable by [`NaiveDate`].
///
/// # Examples
/// ```rust
/// # use litcal::computus::gregorian_easter;
/// # use litcal::nd;
/// assert_eq!(gregorian_easter(2024), nd(2024, 3, 31));
/// ```
pub fn gregorian_easter(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    ymd(year, month, day)
}

/// Return the date of the Julian (Orthodox) Easter.
///
/// If `civil_calendar` is *true* the date is shifted by [`julian_gregorian_offset`] so that it
/// is expressed on the civil calendar while still being the Julian liturgical Easter.
///
/// # Examples
/// ```rust
/// # use litcal::computus::julian_easter;
/// # use litcal::nd;
/// assert_eq!(julian_easter(2024, true), nd(2024, 5, 5));
/// assert_eq!(julian_easter(2024, false), nd(2024, 4, 22));
/// ```
pub fn julian_easter(year: i32, civil_calendar: bool) -> NaiveDate {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = ((d + e + 114) % 31) + 1;
    let date = ymd(year, month, day);
    if civil_calendar {
        date + Days::new(julian_gregorian_offset(year) as u64)
    } else {
        date
    }
}

/// Number of days the Julian calendar lags the Gregorian one in the spring of `year`.
///
/// Ten days were dropped after 1582-10-04. One further day accrues at every subsequent century
/// year that is not a leap year under the Gregorian rule (1700, 1800, 1900, 2100, ...). Years
/// before the reform have no offset.
pub fn julian_gregorian_offset(year: i32) -> u32 {
    if year < 1583 {
        return 0;
    }
    let century = year.div_euclid(100);
    (10 + (century - 16) - (century / 4 - 4)) as u32
}

fn ymd(year: i32, month: i32, day: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter month and day are always valid for a representable year.")
}
