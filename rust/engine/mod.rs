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

//! The computation pipeline: merge, seasons and vigils, psalter weeks, then purge and sort.
//!
//! Each phase relies on fields set by the previous one and the order is never changed. A
//! computation owns every registry it builds; nothing is shared between computations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::calendar::{CalendarSettings, LiturgicalEvent, ResolvedSettings, YearType};
use crate::error::{validate_year, LitCalResult};
use crate::json::JSON;
use crate::layers::{CalendarData, LayeredMerger};
use crate::locale::LocalizationContext;
use crate::proper::derive_movable_feasts;
use crate::registry::EventRegistry;
use crate::resolution::{assign_seasons_and_cycles, backfill_psalter_weeks};
use crate::resources::ResourceLoader;

/// The finished calendar handed to serializers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResult {
    pub settings: ResolvedSettings,
    /// Live events ordered by date then grade.
    pub events: Vec<LiturgicalEvent>,
    pub messages: Vec<String>,
}

impl JSON for CalendarResult {}

impl CalendarResult {
    /// Return the event `key`, if present.
    pub fn get(&self, key: &str) -> Option<&LiturgicalEvent> {
        self.events.iter().find(|e| e.key() == key)
    }
}

/// Compute the resolved registry of one civil year.
pub(crate) fn compute_year<'l>(
    settings: &ResolvedSettings,
    data: &CalendarData,
    l10n: &'l LocalizationContext,
) -> LitCalResult<EventRegistry<'l>> {
    let feasts = derive_movable_feasts(settings);
    let mut registry = LayeredMerger::new(l10n, data, &feasts).merge()?;
    registry.sort();
    assign_seasons_and_cycles(&mut registry, settings.year)?;
    backfill_psalter_weeks(&mut registry);
    registry.sort();
    Ok(registry)
}

/// Compute the calendar described by `settings` from already loaded `data`.
///
/// # Notes
/// A liturgical year computes the civil years `year - 1` and `year` independently, keeps the
/// first from its First Sunday of Advent and the second until the day before its First Sunday
/// of Advent, and merges them. The messages of both civil years are kept whole and in order,
/// including those about events the purge removed, since a message may explain why an event
/// that remains has its date or grade.
///
/// # Examples
/// ```rust,no_run
/// # use litcal::{compute, CalendarSettings, ResourceLoader};
/// let settings = CalendarSettings::new(2024);
/// let data = ResourceLoader::new("data").load(&settings).unwrap();
/// let result = compute(&settings, &data).unwrap();
/// assert_eq!(result.get("Easter").unwrap().date().to_string(), "2024-03-31");
/// ```
pub fn compute(settings: &CalendarSettings, data: &CalendarData) -> LitCalResult<CalendarResult> {
    validate_year(settings.year)?;
    let resolved = settings.resolve(&data.defaults());
    let l10n = LocalizationContext::new(&resolved.locale);
    info!(
        year = resolved.year,
        year_type = ?resolved.year_type,
        calendar = ?resolved.calendar,
        locale = %resolved.locale,
        "computing calendar"
    );
    let registry = match resolved.year_type {
        YearType::Civil => compute_year(&resolved, data, &l10n)?,
        YearType::Liturgical => {
            validate_year(resolved.year - 1)?;
            let mut previous = compute_year(&resolved.with_year(resolved.year - 1), data, &l10n)?;
            let mut current = compute_year(&resolved, data, &l10n)?;
            previous.purge_before("Advent1")?;
            current.purge_after("Advent1")?;
            previous.merge(current);
            previous.sort();
            previous
        }
    };
    let (events, messages) = registry.into_parts();
    info!(events = events.len(), messages = messages.len(), "computed calendar");
    Ok(CalendarResult {
        settings: resolved,
        events,
        messages,
    })
}

/// Load the resources of `settings` from the data directory `root` and compute the calendar.
pub fn compute_from_dir(
    settings: &CalendarSettings,
    root: impl AsRef<Path>,
) -> LitCalResult<CalendarResult> {
    let data = ResourceLoader::new(root.as_ref()).load(settings)?;
    compute(settings, &data)
}
