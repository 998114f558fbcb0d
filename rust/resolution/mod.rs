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

//! Resolution of the merged calendar: seasons, lectionary cycles, Vigil Masses and psalter
//! weeks.
//!
//! The phases run in a fixed order on a merged and sorted registry. Vigil Masses are resolved
//! inside the season pass since their messages read the season labels.

mod psalter;
mod seasons;
mod vigil;

pub use crate::resolution::{
    psalter::backfill_psalter_weeks,
    seasons::{assign_seasons_and_cycles, SeasonAnchors},
    vigil::{is_vigil_eligible, resolve_vigil, CoincidenceResult},
};
