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

use chrono::NaiveDate;
use tracing::info;

use crate::calendar::{LitGrade, LitSeason, LiturgicalCycle, LiturgicalEvent};
use crate::error::{LitCalError, LitCalResult};
use crate::registry::EventRegistry;
use crate::resolution::vigil::resolve_vigil;

/// Dates of the anchor events bounding the seasons of one civil year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeasonAnchors {
    pub advent1: NaiveDate,
    pub christmas: NaiveDate,
    pub baptism_lord: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub holy_thursday: NaiveDate,
    pub easter: NaiveDate,
    pub easter2: NaiveDate,
    pub pentecost: NaiveDate,
}

impl SeasonAnchors {
    /// Read the anchors from the live events of `registry`.
    pub fn from_registry(registry: &EventRegistry<'_>) -> LitCalResult<Self> {
        let date = |key: &str| {
            registry
                .get_event(key)
                .map(|e| e.date())
                .ok_or_else(|| LitCalError::MissingAnchor {
                    key: key.to_string(),
                })
        };
        Ok(SeasonAnchors {
            advent1: date("Advent1")?,
            christmas: date("Christmas")?,
            baptism_lord: date("BaptismLord")?,
            ash_wednesday: date("AshWednesday")?,
            palm_sunday: date("PalmSun")?,
            holy_thursday: date("HolyThurs")?,
            easter: date("Easter")?,
            easter2: date("Easter2")?,
            pentecost: date("Pentecost")?,
        })
    }

    /// Season of `date`. Christmas wraps the end of the civil year.
    pub fn season(&self, date: NaiveDate) -> LitSeason {
        if date >= self.advent1 && date < self.christmas {
            LitSeason::Advent
        } else if date >= self.christmas || date <= self.baptism_lord {
            LitSeason::Christmas
        } else if date >= self.ash_wednesday && date < self.holy_thursday {
            LitSeason::Lent
        } else if date >= self.holy_thursday && date < self.easter {
            LitSeason::EasterTriduum
        } else if date >= self.easter && date <= self.pentecost {
            LitSeason::Easter
        } else {
            LitSeason::OrdinaryTime
        }
    }

    /// Returns *true* strictly between Palm Sunday and Easter, or strictly between Easter and
    /// the Second Sunday of Easter.
    pub fn in_holy_week_or_octave(&self, date: NaiveDate) -> bool {
        (date > self.palm_sunday && date < self.easter)
            || (date > self.easter && date < self.easter2)
    }

    /// Lectionary cycle of `event` in civil year `year`, if it carries one.
    ///
    /// # Notes
    /// Weekdays take the two year weekday cycle keyed on `year - 1`. Sundays and celebrations
    /// above Feast take the three year Sunday cycle, keyed on `year - 1` before the First
    /// Sunday of Advent and `year` from it on. Holy Week and the Easter Octave have no cycle.
    pub fn cycle(&self, event: &LiturgicalEvent, year: i32) -> Option<LiturgicalCycle> {
        let date = event.date();
        if date > self.palm_sunday && date < self.easter2 {
            return None;
        }
        if event.grade() == LitGrade::Weekday && !event.is_sunday() {
            Some(LiturgicalCycle::weekday(year - 1))
        } else if event.is_sunday() || event.grade() > LitGrade::Feast {
            let index = if date >= self.advent1 { year } else { year - 1 };
            Some(LiturgicalCycle::sunday(index))
        } else {
            None
        }
    }
}

/// Label every live event with its season and cycle, resolving Vigil Masses on the way.
///
/// Events are visited in registry order, so the registry should be sorted first. The Vigil
/// Mass of a Sunday or of a Solemnity is created right after its source event is labelled and
/// inherits the source's labels.
pub fn assign_seasons_and_cycles(registry: &mut EventRegistry<'_>, year: i32) -> LitCalResult<()> {
    let anchors = SeasonAnchors::from_registry(registry)?;
    let keys = registry.keys();
    info!(year, events = keys.len(), "assigning seasons and cycles");
    for key in keys.iter() {
        let Some(event) = registry.get_event(key) else {
            continue;
        };
        let season = anchors.season(event.date());
        let cycle = anchors.cycle(event, year);
        let needs_vigil = event.grade() >= LitGrade::Solemnity || event.is_sunday();
        registry.set_season(key, season).ok();
        if let Some(cycle) = cycle {
            registry.set_cycle(key, cycle).ok();
        }
        if needs_vigil {
            resolve_vigil(registry, key, &anchors, year);
        }
    }
    Ok(())
}
