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

//! This is the documentation for litcal-rs
//!
//! `litcal` computes the liturgical calendar of the Roman Rite for a year and a jurisdiction:
//! the General Roman Calendar, a national calendar or a diocesan calendar. Every observance is
//! returned with its grade, colour, season, lectionary cycle and psalter week, together with
//! the messages explaining how coincidences were resolved.
//!
//! ```rust,no_run
//! use litcal::{compute_from_dir, CalendarSettings, Jurisdiction, JSON};
//!
//! let mut settings = CalendarSettings::new(2024);
//! settings.calendar = Jurisdiction::Diocesan { id: "TURIN".to_string() };
//! let result = compute_from_dir(&settings, "data").unwrap();
//! println!("{}", result.to_json_pretty().unwrap());
//! ```

#[cfg(test)]
mod tests;

pub mod json;
pub use crate::json::JSON;

pub mod error;
pub use crate::error::{LitCalError, LitCalResult, UpdateError};

pub mod computus;
pub use crate::computus::{gregorian_easter, julian_easter};

pub mod calendar;
pub use crate::calendar::{
    nd, CalendarDefaults, CalendarSettings, Jurisdiction, LitColor, LitGrade, LitSeason,
    LiturgicalCycle, LiturgicalEvent, YearType,
};

pub mod locale;
pub use crate::locale::LocalizationContext;

pub mod proper;
pub use crate::proper::{derive_movable_feasts, MovableFeasts};

pub mod registry;
pub use crate::registry::{EventRegistry, EventUpdate};

pub mod layers;
pub use crate::layers::{CalendarData, LayeredMerger};

pub mod resolution;

pub mod resources;
pub use crate::resources::ResourceLoader;

pub mod engine;
pub use crate::engine::{compute, compute_from_dir, CalendarResult};
