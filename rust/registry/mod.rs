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

//! The event registry of a computation and its indices.

mod collection;
mod period;
mod update;

pub use crate::registry::{
    collection::EventRegistry,
    period::{classify_key, psalter_week, LitPeriod},
    update::{EventUpdate, VesperFlags},
};
