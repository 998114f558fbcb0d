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

//! Error types for calendar computation.
//!
//! Two families exist. [`LitCalError`] aborts a computation: it is raised for missing or
//! malformed required resources and for inputs the engine cannot compute. [`UpdateError`] is
//! local to a single registry mutation and never aborts a merge on its own; the calling layer
//! decides whether the failure matters.

use std::path::PathBuf;
use thiserror::Error;

/// Minimum year supported for calculations (first full Gregorian year).
pub const MIN_YEAR: i32 = 1583;
/// Maximum year supported for calculations.
pub const MAX_YEAR: i32 = 9999;

/// Fatal errors of a calendar computation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LitCalError {
    #[error("required resource `{}` could not be read: {source}", .path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required resource `{}` is malformed: {source}", .path.display())]
    ResourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("the Proper of Time names for locale `{locale}` have no entry for `{key}`")]
    MissingProperOfTimeName { key: String, locale: String },

    #[error("invalid year: {year} (must be between {} and {})", MIN_YEAR, MAX_YEAR)]
    InvalidYear { year: i32 },

    #[error("anchor event `{key}` is not present in the calendar")]
    MissingAnchor { key: String },

    #[error("no {kind} calendar data is available for `{id}`")]
    UnknownCalendar { kind: &'static str, id: String },
}

/// Standard result type for the library.
pub type LitCalResult<T> = Result<T, LitCalError>;

/// Local failure of a typed registry update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("event `{0}` does not exist in the calendar")]
    UnknownEvent(String),

    #[error("event `{key}` already has the requested `{property}`")]
    Unchanged { key: String, property: &'static str },

    #[error("event `{0}` has been suppressed")]
    Suppressed(String),
}

/// Validate that `year` lies in the supported Gregorian range.
pub fn validate_year(year: i32) -> LitCalResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        Err(LitCalError::InvalidYear { year })
    } else {
        Ok(())
    }
}
