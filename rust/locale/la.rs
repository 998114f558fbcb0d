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

//! Latin strings.

use crate::locale::{roman, LocaleTable};

pub(crate) static TABLE: LocaleTable = LocaleTable {
    grades: [
        "feria",
        "Commemoratio",
        "Memoria ad libitum",
        "Memoria obligatoria",
        "FESTUM",
        "FESTUM DOMINI",
        "SOLLEMNITAS",
        "celebratio altioris ordinis quam sollemnitatis",
    ],
    grade_abbr: ["f", "c", "ml", "M", "F", "F", "S", "S"],
    seasons: [
        "Tempus Adventus",
        "Tempus Nativitatis",
        "Tempus Quadragesimae",
        "Triduum Paschale",
        "Tempus Paschale",
        "Tempus per Annum",
    ],
    weekdays: [
        "Feria II",
        "Feria III",
        "Feria IV",
        "Feria V",
        "Feria VI",
        "Sabbato",
        "Dominica",
    ],
    months: [
        "Ianuarii",
        "Februarii",
        "Martii",
        "Aprilis",
        "Maii",
        "Iunii",
        "Iulii",
        "Augusti",
        "Septembris",
        "Octobris",
        "Novembris",
        "Decembris",
    ],
    ordinal: roman,
    vigil: "{name}, Missa in Vigilia",
    cycle: "ANNUM {letter}",
    date: "{day} {month}",
    advent_weekday: "{weekday} hebdomadae {ordinal} Adventus",
    advent_dec: "Feria Adventus: {date}",
    christmas_octave: "Dies {ordinal} infra octavam Nativitatis",
    before_epiphany: "{weekday} ante Epiphaniam, {date}",
    after_epiphany: "{weekday} post Epiphaniam, {date}",
    after_ash_wednesday: "{weekday} post Cineres",
    lent_weekday: "{weekday} hebdomadae {ordinal} Quadragesimae",
    easter_weekday: "{weekday} hebdomadae {ordinal} Paschae",
    ordinary_weekday: "{weekday} hebdomadae {ordinal} per annum",
};
