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

//! Calendar layers and the merge that applies them in precedence order.
//!
//! Layers are the Missal Sanctorale, the legislated memorials and the wider region, national
//! and diocesan calendars. Every Sanctorale event enters the registry through
//! [`place_event`], which resolves its coincidence with what is already on its date.

mod data;
mod items;
mod merger;
mod precedence;
mod serde;

pub use crate::layers::{
    data::CalendarData,
    items::{
        DateRule, Festivity, FestivityProperty, ItemMetadata, LayerAction, LayerDocument,
        LayerItem, LayerMetadata, Missal, SanctoraleRecord,
    },
    merger::LayeredMerger,
    precedence::{place_event, Placement},
};
