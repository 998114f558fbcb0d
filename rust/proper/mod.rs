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

//! The Proper of Time: static ranks, Easter-relative dates and weekday placeholders.

mod movable;
mod tempore;
mod weekdays;

pub use crate::proper::{
    movable::{advent1, derive_movable_feasts, MovableFeasts},
    tempore::{is_lord_or_bvm, proper_of_time_entry, ProperOfTimeEntry, LORD_OR_BVM, PROPER_OF_TIME},
    weekdays::generate_weekdays,
};

pub(crate) use crate::proper::movable::{next_weekday, shift};
