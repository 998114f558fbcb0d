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

use chrono::{Datelike, NaiveDate};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::calendar::{GradeClass, LitGrade, LiturgicalEvent};
use crate::error::{LitCalError, LitCalResult, UpdateError};
use crate::locale::LocalizationContext;
use crate::proper::is_lord_or_bvm;
use crate::registry::period::{classify_key, psalter_week, LitPeriod};

/// The owned store of every event of one computation.
///
/// The primary map is the sole owner of live events. Every other collection is an index of
/// keys derived from the live events and is kept consistent by the registry's own methods:
///
/// - a key is in at most one of the solemnities, feasts and memorials indices, the one matching
///   the class of its grade,
/// - suppressed events are held apart from live ones and keep their data so they may be
///   reinstated,
/// - all maps preserve insertion order so that iteration is deterministic.
///
/// The registry also accumulates the human readable messages produced while computing.
#[derive(Debug, Clone)]
pub struct EventRegistry<'l> {
    l10n: &'l LocalizationContext,
    pub(crate) events: IndexMap<String, LiturgicalEvent>,
    suppressed: IndexMap<String, LiturgicalEvent>,
    reinstated: IndexSet<String>,
    solemnities: IndexSet<String>,
    feasts: IndexSet<String>,
    memorials: IndexSet<String>,
    lord_or_bvm: IndexSet<String>,
    periods: IndexMap<LitPeriod, IndexSet<String>>,
    messages: Vec<String>,
}

impl<'l> EventRegistry<'l> {
    /// Create an empty registry localized by `l10n`.
    pub fn new(l10n: &'l LocalizationContext) -> Self {
        EventRegistry {
            l10n,
            events: IndexMap::new(),
            suppressed: IndexMap::new(),
            reinstated: IndexSet::new(),
            solemnities: IndexSet::new(),
            feasts: IndexSet::new(),
            memorials: IndexSet::new(),
            lord_or_bvm: IndexSet::new(),
            periods: IndexMap::new(),
            messages: Vec::new(),
        }
    }

    /// The localization context of the computation.
    pub fn l10n(&self) -> &'l LocalizationContext {
        self.l10n
    }

    /// Insert an event, replacing any live or suppressed event with the same key.
    ///
    /// Index membership is derived from the event's grade and key. Sundays of Advent, Lent,
    /// Easter and Ordinary Time receive their psalter week.
    pub fn add_event(&mut self, mut event: LiturgicalEvent) {
        let key = event.key.clone();
        if self.events.contains_key(&key) {
            self.unindex(&key);
        }
        self.suppressed.shift_remove(&key);
        event.grade_lcl = self.l10n.grade(event.grade).to_string();
        event.grade_abbr = self.l10n.grade_abbr(event.grade).to_string();
        if let Some((period, Some(week))) = classify_key(&key) {
            if period.is_sunday() {
                event.psalter_week = Some(psalter_week(week));
            }
        }
        let grade = event.grade;
        self.events.insert(key.clone(), event);
        self.index(&key, grade);
    }

    fn index(&mut self, key: &str, grade: LitGrade) {
        if let Some(class) = grade.class() {
            self.grade_index_mut(class).insert(key.to_string());
        }
        if let Some((period, _)) = classify_key(key) {
            self.periods
                .entry(period)
                .or_default()
                .insert(key.to_string());
        }
        if is_lord_or_bvm(key) {
            self.lord_or_bvm.insert(key.to_string());
        }
    }

    fn unindex(&mut self, key: &str) {
        self.solemnities.shift_remove(key);
        self.feasts.shift_remove(key);
        self.memorials.shift_remove(key);
        self.lord_or_bvm.shift_remove(key);
        for keys in self.periods.values_mut() {
            keys.shift_remove(key);
        }
    }

    pub(crate) fn grade_index_mut(&mut self, class: GradeClass) -> &mut IndexSet<String> {
        match class {
            GradeClass::Solemnity => &mut self.solemnities,
            GradeClass::Feast => &mut self.feasts,
            GradeClass::Memorial => &mut self.memorials,
        }
    }

    /// Move `key` between grade indices after its grade changed from `old` to `new`.
    pub(crate) fn migrate_grade_index(&mut self, key: &str, old: LitGrade, new: LitGrade) {
        if old.class() == new.class() {
            return;
        }
        if let Some(class) = old.class() {
            self.grade_index_mut(class).shift_remove(key);
        }
        if let Some(class) = new.class() {
            self.grade_index_mut(class).insert(key.to_string());
        }
        debug!(key, from = ?old, to = ?new, "migrated grade index");
    }

    /// Return the live event `key`.
    pub fn get_event(&self, key: &str) -> Option<&LiturgicalEvent> {
        self.events.get(key)
    }

    /// Return the suppressed event `key`.
    pub fn get_suppressed(&self, key: &str) -> Option<&LiturgicalEvent> {
        self.suppressed.get(key)
    }

    pub(crate) fn live_mut(&mut self, key: &str) -> Result<&mut LiturgicalEvent, UpdateError> {
        if self.suppressed.contains_key(key) {
            return Err(UpdateError::Suppressed(key.to_string()));
        }
        self.events
            .get_mut(key)
            .ok_or_else(|| UpdateError::UnknownEvent(key.to_string()))
    }

    /// Returns *true* if `key` is live.
    pub fn contains(&self, key: &str) -> bool {
        self.events.contains_key(key)
    }

    /// Returns *true* if `key` has been suppressed.
    pub fn is_suppressed(&self, key: &str) -> bool {
        self.suppressed.contains_key(key)
    }

    /// Returns *true* if `key` has been reinstated after a suppression.
    pub fn is_reinstated(&self, key: &str) -> bool {
        self.reinstated.contains(key)
    }

    /// Return every live event falling on `date`, in registry order.
    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&LiturgicalEvent> {
        self.events.values().filter(|e| e.date == date).collect()
    }

    /// Return the live event of the solemnities index on `date`, ignoring Vigil Masses and
    /// the event `excluding`.
    pub fn solemnity_on(&self, date: NaiveDate, excluding: &str) -> Option<&LiturgicalEvent> {
        self.solemnities
            .iter()
            .filter(|k| k.as_str() != excluding)
            .filter_map(|k| self.events.get(k))
            .find(|e| e.date == date && !e.is_vigil_mass())
    }

    /// Iterate over live events in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &LiturgicalEvent> {
        self.events.values()
    }

    /// Keys of the live events in registry order.
    pub fn keys(&self) -> Vec<String> {
        self.events.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn solemnities(&self) -> &IndexSet<String> {
        &self.solemnities
    }

    pub fn feasts(&self) -> &IndexSet<String> {
        &self.feasts
    }

    pub fn memorials(&self) -> &IndexSet<String> {
        &self.memorials
    }

    /// Keys of the live events of a liturgical period.
    pub fn period(&self, period: LitPeriod) -> Vec<&str> {
        self.periods
            .get(&period)
            .map(|keys| keys.iter().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns *true* if `key` is a live event of `period`.
    pub fn in_period(&self, key: &str, period: LitPeriod) -> bool {
        self.periods
            .get(&period)
            .map(|keys| keys.contains(key))
            .unwrap_or(false)
    }

    /// Returns *true* if `key` is a live Solemnity of the Lord or of the Blessed Virgin Mary.
    pub fn is_lord_or_bvm(&self, key: &str) -> bool {
        self.lord_or_bvm.contains(key)
    }

    pub fn suppressed_keys(&self) -> Vec<&str> {
        self.suppressed.keys().map(|k| k.as_str()).collect()
    }

    pub fn reinstated_keys(&self) -> Vec<&str> {
        self.reinstated.iter().map(|k| k.as_str()).collect()
    }

    /// Suppress the live event `key`.
    ///
    /// The event leaves every index but its data is kept for a later [`reinstate`](Self::reinstate).
    pub fn remove_event(&mut self, key: &str) -> Result<(), UpdateError> {
        if self.suppressed.contains_key(key) {
            return Err(UpdateError::Suppressed(key.to_string()));
        }
        let event = self
            .events
            .shift_remove(key)
            .ok_or_else(|| UpdateError::UnknownEvent(key.to_string()))?;
        self.unindex(key);
        self.reinstated.shift_remove(key);
        self.suppressed.insert(key.to_string(), event);
        debug!(key, "suppressed event");
        Ok(())
    }

    /// Return a suppressed event to the live set, re-deriving its indices.
    pub fn reinstate(&mut self, key: &str) -> Result<(), UpdateError> {
        let event = self
            .suppressed
            .shift_remove(key)
            .ok_or_else(|| UpdateError::UnknownEvent(key.to_string()))?;
        let grade = event.grade;
        self.events.insert(key.to_string(), event);
        self.index(key, grade);
        self.reinstated.insert(key.to_string());
        debug!(key, "reinstated event");
        Ok(())
    }

    /// Delete the live event `key` without keeping it for reinstatement.
    pub(crate) fn delete_event(&mut self, key: &str) -> Option<LiturgicalEvent> {
        let event = self.events.shift_remove(key)?;
        self.unindex(key);
        self.reinstated.shift_remove(key);
        Some(event)
    }

    /// Union `other` into `self`.
    ///
    /// Events of `other` whose key is already used by `self` are added under the key
    /// `"{key}_{civil year}"`, and Vigil Masses of `other` follow the renamed key of their
    /// target. Suppressed events of `other` are only added when their key is free.
    pub fn merge(&mut self, other: EventRegistry<'_>) {
        let mut renamed: IndexMap<String, String> = IndexMap::new();
        let taken: IndexSet<String> = self
            .events
            .keys()
            .chain(self.suppressed.keys())
            .cloned()
            .collect();
        let mut incoming: Vec<LiturgicalEvent> = Vec::with_capacity(other.events.len());
        for (key, mut event) in other.events {
            if taken.contains(&key) {
                let new_key = format!("{}_{}", key, event.date.year());
                debug!(key = %key, new_key = %new_key, "renamed colliding key in merge");
                event.key = new_key.clone();
                renamed.insert(key, new_key);
            }
            incoming.push(event);
        }
        for mut event in incoming {
            if let Some(target) = event.is_vigil_for.as_ref().and_then(|t| renamed.get(t)) {
                event.is_vigil_for = Some(target.clone());
            }
            let key = event.key.clone();
            let grade = event.grade;
            if other.reinstated.contains(&key) {
                self.reinstated.insert(key.clone());
            }
            self.events.insert(key.clone(), event);
            self.index(&key, grade);
        }
        for (key, event) in other.suppressed {
            if !self.events.contains_key(&key) && !self.suppressed.contains_key(&key) {
                self.suppressed.insert(key, event);
            }
        }
        self.messages.extend(other.messages);
    }

    /// Order live events by date then grade, ascending. Ties keep their insertion order.
    pub fn sort(&mut self) {
        self.events
            .sort_by(|_, a, _, b| a.date.cmp(&b.date).then(a.grade.cmp(&b.grade)));
    }

    /// Date on which an event counts for purging: a Vigil Mass counts on its target's date.
    fn purge_date(&self, event: &LiturgicalEvent) -> NaiveDate {
        event
            .is_vigil_for
            .as_ref()
            .and_then(|t| self.events.get(t).or_else(|| self.suppressed.get(t)))
            .map(|target| target.date)
            .unwrap_or(event.date)
    }

    fn anchor_date(&self, anchor: &str) -> LitCalResult<NaiveDate> {
        self.events
            .get(anchor)
            .map(|e| e.date)
            .ok_or_else(|| LitCalError::MissingAnchor {
                key: anchor.to_string(),
            })
    }

    fn purge_where(&mut self, outside: impl Fn(NaiveDate) -> bool) {
        let removed: Vec<String> = self
            .events
            .values()
            .filter(|e| outside(self.purge_date(e)))
            .map(|e| e.key.clone())
            .collect();
        for key in removed.iter() {
            self.delete_event(key);
        }
        self.suppressed.retain(|_, e| !outside(e.date));
        debug!(removed = removed.len(), "purged events");
    }

    /// Remove every event dated before the live event `anchor`.
    ///
    /// A Vigil Mass is kept if and only if its target is kept.
    pub fn purge_before(&mut self, anchor: &str) -> LitCalResult<()> {
        let boundary = self.anchor_date(anchor)?;
        self.purge_where(|date| date < boundary);
        Ok(())
    }

    /// Remove every event dated on or after the live event `anchor`.
    ///
    /// A Vigil Mass is removed if and only if its target is removed.
    pub fn purge_after(&mut self, anchor: &str) -> LitCalResult<()> {
        let boundary = self.anchor_date(anchor)?;
        self.purge_where(|date| date >= boundary);
        Ok(())
    }

    /// Append a human readable message.
    pub fn push_message(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the registry, returning live events in registry order and the messages.
    pub fn into_parts(self) -> (Vec<LiturgicalEvent>, Vec<String>) {
        (self.events.into_values().collect(), self.messages)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{nd, LitColor, LitEventType};

    fn event(key: &str, date: NaiveDate, grade: LitGrade) -> LiturgicalEvent {
        LiturgicalEvent::new(
            key,
            key,
            date,
            vec![LitColor::White],
            LitEventType::Fixed,
            grade,
            vec![],
        )
    }

    fn fixture_registry(l10n: &LocalizationContext) -> EventRegistry<'_> {
        let mut registry = EventRegistry::new(l10n);
        registry.add_event(event("Advent1", nd(2024, 12, 1), LitGrade::Solemnity));
        registry.add_event(event("StAndrew", nd(2024, 11, 30), LitGrade::Feast));
        registry.add_event(event("StNicholas", nd(2024, 12, 6), LitGrade::OptionalMemorial));
        registry.add_event(event("StAmbrose", nd(2024, 12, 7), LitGrade::Memorial));
        registry.add_event(event("ImmaculateConception", nd(2024, 12, 9), LitGrade::Solemnity));
        registry
    }

    #[test]
    fn test_add_event_indexes() {
        let l10n = LocalizationContext::new("en");
        let registry = fixture_registry(&l10n);
        assert!(registry.solemnities().contains("Advent1"));
        assert!(registry.feasts().contains("StAndrew"));
        assert!(registry.memorials().contains("StAmbrose"));
        assert!(!registry.memorials().contains("StNicholas"));
        assert!(registry.is_lord_or_bvm("ImmaculateConception"));
        assert!(registry.in_period("Advent1", LitPeriod::AdventSundays));
        assert_eq!(registry.get_event("Advent1").unwrap().psalter_week(), Some(1));
        assert_eq!(registry.get_event("StAndrew").unwrap().grade_lcl(), "FEAST");
    }

    #[test]
    fn test_events_on_date() {
        let l10n = LocalizationContext::new("en");
        let registry = fixture_registry(&l10n);
        let events = registry.events_on_date(nd(2024, 12, 7));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].key(), "StAmbrose");
        assert!(registry.events_on_date(nd(2024, 12, 8)).is_empty());
    }

    #[test]
    fn test_remove_and_reinstate() {
        let l10n = LocalizationContext::new("en");
        let mut registry = fixture_registry(&l10n);
        registry.remove_event("StAmbrose").unwrap();
        assert!(!registry.contains("StAmbrose"));
        assert!(registry.is_suppressed("StAmbrose"));
        assert!(!registry.memorials().contains("StAmbrose"));
        assert_eq!(
            registry.remove_event("StAmbrose"),
            Err(UpdateError::Suppressed("StAmbrose".to_string()))
        );
        registry.reinstate("StAmbrose").unwrap();
        assert!(registry.contains("StAmbrose"));
        assert!(!registry.is_suppressed("StAmbrose"));
        assert!(registry.is_reinstated("StAmbrose"));
        assert!(registry.memorials().contains("StAmbrose"));
        assert_eq!(
            registry.reinstate("StAmbrose"),
            Err(UpdateError::UnknownEvent("StAmbrose".to_string()))
        );
    }

    #[test]
    fn test_sort_is_by_date_then_grade() {
        let l10n = LocalizationContext::new("en");
        let mut registry = fixture_registry(&l10n);
        registry.add_event(event("AdventWeekday1Saturday", nd(2024, 12, 7), LitGrade::Weekday));
        registry.sort();
        let keys = registry.keys();
        assert_eq!(
            keys,
            vec![
                "StAndrew",
                "Advent1",
                "StNicholas",
                "AdventWeekday1Saturday",
                "StAmbrose",
                "ImmaculateConception"
            ]
        );
    }

    #[test]
    fn test_purge_keeps_vigil_with_target() {
        let l10n = LocalizationContext::new("en");
        let mut registry = fixture_registry(&l10n);
        let vigil = registry
            .get_event("Advent1")
            .unwrap()
            .vigil("Advent1 Vigil Mass".to_string());
        registry.add_event(vigil);
        let mut after = registry.clone();

        registry.purge_before("Advent1").unwrap();
        assert!(!registry.contains("StAndrew"));
        assert!(registry.contains("Advent1_vigil"));
        assert!(registry.contains("Advent1"));

        after.purge_after("Advent1").unwrap();
        assert!(after.contains("StAndrew"));
        assert!(!after.contains("Advent1_vigil"));
        assert!(!after.contains("Advent1"));
        assert!(!after.solemnities().contains("ImmaculateConception"));

        assert!(matches!(
            after.purge_before("Advent1"),
            Err(LitCalError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_merge_renames_colliding_keys() {
        let l10n = LocalizationContext::new("en");
        let mut previous = EventRegistry::new(&l10n);
        previous.add_event(event("StAndrew", nd(2023, 11, 30), LitGrade::Feast));
        previous.push_message("previous".to_string());
        let mut current = fixture_registry(&l10n);
        let vigil = current
            .get_event("ImmaculateConception")
            .unwrap()
            .vigil("vigil".to_string());
        current.add_event(vigil);
        current.push_message("current".to_string());

        previous.merge(current);
        assert!(previous.contains("StAndrew"));
        assert!(previous.contains("StAndrew_2024"));
        assert!(previous.feasts().contains("StAndrew_2024"));
        assert_eq!(
            previous.get_event("ImmaculateConception_vigil").unwrap().is_vigil_for(),
            Some("ImmaculateConception")
        );
        assert_eq!(previous.messages(), &["previous", "current"]);
    }
}
