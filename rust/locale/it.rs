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

//! Italian strings.

use crate::locale::LocaleTable;

fn ordinal(n: u32) -> String {
    format!("{}ª", n)
}

pub(crate) static TABLE: LocaleTable = LocaleTable {
    grades: [
        "feria",
        "Commemorazione",
        "Memoria facoltativa",
        "Memoria obbligatoria",
        "FESTA",
        "FESTA DEL SIGNORE",
        "SOLENNITÀ",
        "celebrazione con precedenza sulle solennità",
    ],
    grade_abbr: ["f", "c", "mf", "M", "F", "F", "S", "S"],
    seasons: [
        "Avvento",
        "Natale",
        "Quaresima",
        "Triduo Pasquale",
        "Pasqua",
        "Tempo Ordinario",
    ],
    weekdays: [
        "Lunedì",
        "Martedì",
        "Mercoledì",
        "Giovedì",
        "Venerdì",
        "Sabato",
        "Domenica",
    ],
    months: [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ],
    ordinal,
    vigil: "{name}, Messa nella Vigilia",
    cycle: "ANNO {letter}",
    date: "{day} {month}",
    advent_weekday: "{weekday} della {ordinal} settimana di Avvento",
    advent_dec: "Feria di Avvento: {date}",
    christmas_octave: "{ordinal} giorno fra l'ottava di Natale",
    before_epiphany: "{weekday} prima dell'Epifania, {date}",
    after_epiphany: "{weekday} dopo l'Epifania, {date}",
    after_ash_wednesday: "{weekday} dopo le Ceneri",
    lent_weekday: "{weekday} della {ordinal} settimana di Quaresima",
    easter_weekday: "{weekday} della {ordinal} settimana di Pasqua",
    ordinary_weekday: "{weekday} della {ordinal} settimana del Tempo Ordinario",
};
