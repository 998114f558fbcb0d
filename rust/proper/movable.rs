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

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar::{nd, AscensionRule, CorpusChristiRule, EpiphanyRule, ResolvedSettings};
use crate::computus::gregorian_easter;

/// Dates of the Proper of Time for one civil year.
///
/// The named fields are the anchors every later phase reasons about. `entries` lists every
/// dated Proper of Time key in chronological order of derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovableFeasts {
    pub year: i32,
    pub easter: NaiveDate,
    pub epiphany: NaiveDate,
    pub baptism_lord: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub lent1: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub easter2: NaiveDate,
    pub pentecost: NaiveDate,
    pub christ_king: NaiveDate,
    pub advent1: NaiveDate,
    pub christmas: NaiveDate,
    pub entries: Vec<(String, NaiveDate)>,
}

/// Add a signed number of days to a date.
pub(crate) fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date + Days::new(days as u64)
    } else {
        date - Days::new(days.unsigned_abs())
    }
}

/// First date on or after `date` falling on `weekday`.
pub(crate) fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let delta = (7 + weekday.num_days_from_sunday() - date.weekday().num_days_from_sunday()) % 7;
    date + Days::new(delta as u64)
}

/// Sunday on or before `date`.
pub(crate) fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_sunday() as u64)
}

/// First Sunday of Advent of `year`: the fourth Sunday before Christmas.
pub fn advent1(year: i32) -> NaiveDate {
    let christmas = nd(year, 12, 25);
    let back = match christmas.weekday().num_days_from_sunday() {
        0 => 7,
        n => n,
    };
    christmas - Days::new(back as u64 + 21)
}

/// Derive every date of the Proper of Time of `settings.year`.
///
/// # Notes
/// Ordinary Time Sundays are numbered forwards from the Baptism of the Lord until the Sunday
/// before Ash Wednesday, then backwards from Christ the King (week 34) after Pentecost. Sundays
/// taken by Trinity or by Corpus Christi carry no Ordinary Time key.
///
/// # Examples
/// ```rust
/// # use litcal::proper::derive_movable_feasts;
/// # use litcal::{nd, CalendarDefaults, CalendarSettings};
/// let settings = CalendarSettings::new(2024).resolve(&CalendarDefaults::default());
/// let feasts = derive_movable_feasts(&settings);
/// assert_eq!(feasts.ash_wednesday, nd(2024, 2, 14));
/// assert_eq!(feasts.pentecost, nd(2024, 5, 19));
/// assert_eq!(feasts.advent1, nd(2024, 12, 1));
/// ```
pub fn derive_movable_feasts(settings: &ResolvedSettings) -> MovableFeasts {
    let year = settings.year;
    let easter = gregorian_easter(year);
    let mut entries: Vec<(String, NaiveDate)> = Vec::new();
    let mut push = |key: &str, date: NaiveDate| entries.push((key.to_string(), date));

    // Christmas cycle at the start of the civil year
    push("MotherGod", nd(year, 1, 1));
    let epiphany = match settings.epiphany {
        EpiphanyRule::Jan6 => nd(year, 1, 6),
        EpiphanyRule::SundayJan2Jan8 => next_weekday(nd(year, 1, 2), Weekday::Sun),
    };
    if settings.epiphany == EpiphanyRule::Jan6 {
        let sunday = next_weekday(nd(year, 1, 2), Weekday::Sun);
        if sunday.day() <= 5 {
            push("Christmas2", sunday);
        }
    }
    push("Epiphany", epiphany);
    let baptism_lord = if epiphany.day() >= 7 {
        epiphany + Days::new(1)
    } else {
        next_weekday(epiphany + Days::new(1), Weekday::Sun)
    };
    push("BaptismLord", baptism_lord);

    // early Ordinary Time
    let ash_wednesday = shift(easter, -46);
    let mut week = 2;
    let mut sunday = next_weekday(baptism_lord + Days::new(1), Weekday::Sun);
    while sunday < ash_wednesday {
        push(&format!("OrdSunday{}", week), sunday);
        week += 1;
        sunday = sunday + Days::new(7);
    }

    // Lent and Holy Week
    push("AshWednesday", ash_wednesday);
    let lent1 = shift(easter, -42);
    for n in 1..=5_i64 {
        push(&format!("Lent{}", n), shift(lent1, 7 * (n - 1)));
    }
    let palm_sunday = shift(easter, -7);
    push("PalmSun", palm_sunday);
    push("MonHolyWeek", shift(easter, -6));
    push("TueHolyWeek", shift(easter, -5));
    push("WedHolyWeek", shift(easter, -4));
    let holy_thursday = shift(easter, -3);
    push("HolyThurs", holy_thursday);
    push("GoodFri", shift(easter, -2));
    push("EasterVigil", shift(easter, -1));

    // Easter
    push("Easter", easter);
    for (i, key) in [
        "MonOctaveEaster",
        "TueOctaveEaster",
        "WedOctaveEaster",
        "ThuOctaveEaster",
        "FriOctaveEaster",
        "SatOctaveEaster",
    ]
    .iter()
    .enumerate()
    {
        push(*key, shift(easter, i as i64 + 1));
    }
    let easter2 = shift(easter, 7);
    let last_easter_sunday = match settings.ascension {
        AscensionRule::Thursday => 7,
        AscensionRule::Sunday => 6,
    };
    for n in 2..=last_easter_sunday {
        push(&format!("Easter{}", n), shift(easter, 7 * (n - 1)));
        if n == 6 && settings.ascension == AscensionRule::Thursday {
            push("Ascension", shift(easter, 39));
        }
    }
    if settings.ascension == AscensionRule::Sunday {
        push("Ascension", shift(easter, 42));
    }
    let pentecost = shift(easter, 49);
    push("Pentecost", pentecost);
    let trinity = shift(easter, 56);
    push("Trinity", trinity);
    let corpus_christi = match settings.corpus_christi {
        CorpusChristiRule::Thursday => shift(easter, 60),
        CorpusChristiRule::Sunday => shift(easter, 63),
    };
    push("CorpusChristi", corpus_christi);
    push("SacredHeart", shift(easter, 68));

    // late Ordinary Time, numbered backwards from Christ the King
    let advent1 = advent1(year);
    let christ_king = shift(advent1, -7);
    let mut sunday = shift(pentecost, 7);
    while sunday < christ_king {
        if sunday != trinity && sunday != corpus_christi {
            let weeks_before = (christ_king - sunday).num_days() / 7;
            push(&format!("OrdSunday{}", 34 - weeks_before), sunday);
        }
        sunday = sunday + Days::new(7);
    }
    push("ChristKing", christ_king);

    // Advent and Christmas at the end of the civil year
    for n in 1..=4_i64 {
        push(&format!("Advent{}", n), shift(advent1, 7 * (n - 1)));
    }
    let christmas = nd(year, 12, 25);
    push("Christmas", christmas);
    let holy_family = if christmas.weekday() == Weekday::Sun {
        nd(year, 12, 30)
    } else {
        next_weekday(christmas, Weekday::Sun)
    };
    push("HolyFamily", holy_family);

    MovableFeasts {
        year,
        easter,
        epiphany,
        baptism_lord,
        ash_wednesday,
        lent1,
        palm_sunday,
        holy_thursday,
        easter2,
        pentecost,
        christ_king,
        advent1,
        christmas,
        entries,
    }
}

impl MovableFeasts {
    /// Return the date of a Proper of Time `key`.
    pub fn date_of(&self, key: &str) -> Option<NaiveDate> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| *d)
    }
}
