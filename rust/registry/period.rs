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

//! Classification of Proper of Time keys into liturgical periods.

/// A liturgical period tracked by its own registry index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LitPeriod {
    AdventWeekdays,
    ChristmasWeekdays,
    EpiphanyWeekdays,
    LentWeekdays,
    AdventSundays,
    LentSundays,
    EasterSundays,
    OrdinarySundays,
}

impl LitPeriod {
    /// Returns *true* for the Sunday periods.
    pub fn is_sunday(&self) -> bool {
        matches!(
            self,
            LitPeriod::AdventSundays
                | LitPeriod::LentSundays
                | LitPeriod::EasterSundays
                | LitPeriod::OrdinarySundays
        )
    }
}

fn leading_number(s: &str) -> Option<i32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn whole_number(s: &str) -> Option<i32> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Return the period a key belongs to and, where the key carries one, its week number.
///
/// # Examples
/// ```rust
/// # use litcal::registry::{classify_key, LitPeriod};
/// assert_eq!(classify_key("Lent3"), Some((LitPeriod::LentSundays, Some(3))));
/// assert_eq!(classify_key("LentWeekday0Friday"), Some((LitPeriod::LentWeekdays, Some(0))));
/// assert_eq!(classify_key("Lent3_vigil"), None);
/// ```
pub fn classify_key(key: &str) -> Option<(LitPeriod, Option<i32>)> {
    if let Some(rest) = key.strip_prefix("AdventWeekday") {
        return Some((LitPeriod::AdventWeekdays, leading_number(rest)));
    }
    if key.starts_with("ChristmasWeekday") {
        return Some((LitPeriod::ChristmasWeekdays, None));
    }
    if key.starts_with("DayBeforeEpiphany") || key.starts_with("DayAfterEpiphany") {
        return Some((LitPeriod::EpiphanyWeekdays, None));
    }
    if let Some(rest) = key.strip_prefix("LentWeekday") {
        return Some((LitPeriod::LentWeekdays, leading_number(rest)));
    }
    let sundays = [
        ("Advent", LitPeriod::AdventSundays),
        ("Lent", LitPeriod::LentSundays),
        ("Easter", LitPeriod::EasterSundays),
        ("OrdSunday", LitPeriod::OrdinarySundays),
    ];
    sundays.iter().find_map(|(prefix, period)| {
        key.strip_prefix(prefix)
            .and_then(whole_number)
            .map(|n| (*period, Some(n)))
    })
}

/// Psalter week of liturgical week `week`: `((week - 1) mod 4) + 1`.
///
/// # Examples
/// ```rust
/// # use litcal::registry::psalter_week;
/// assert_eq!(psalter_week(11), 3);
/// assert_eq!(psalter_week(12), 4);
/// assert_eq!(psalter_week(4), 4);
/// ```
pub fn psalter_week(week: i32) -> u8 {
    ((week - 1).rem_euclid(4) + 1) as u8
}
