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

use indexmap::IndexMap;

use crate::calendar::CalendarDefaults;
use crate::layers::items::{LayerDocument, LayerItem, Missal};

/// Every resource a computation reads, loaded for one locale and one jurisdiction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarData {
    /// Proper of Time names in the active locale, by key.
    pub proper_of_time: IndexMap<String, String>,
    /// Editions of the Roman Missal, oldest first.
    pub missals: Vec<Missal>,
    /// Memorials legislated after the editions, in order of application.
    pub memorials: Vec<LayerItem>,
    pub wider_region: Option<LayerDocument>,
    pub national: Option<LayerDocument>,
    /// Missals listed by the national calendar, in the order listed.
    pub national_missals: Vec<Missal>,
    pub diocesan: Option<LayerDocument>,
    /// Missals listed by the diocesan calendar, in the order listed.
    pub diocesan_missals: Vec<Missal>,
}

impl CalendarData {
    /// Defaults published by the national calendar, if one is loaded.
    pub fn defaults(&self) -> CalendarDefaults {
        self.national
            .as_ref()
            .map(|doc| doc.metadata.settings.clone())
            .unwrap_or_default()
    }
}
