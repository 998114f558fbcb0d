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
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::calendar::{nd, CalendarLayer, LitColor, LitEventType, LitGrade, LiturgicalEvent};
use crate::error::{LitCalError, LitCalResult, UpdateError};
use crate::layers::data::CalendarData;
use crate::layers::items::{DateRule, Festivity, FestivityProperty, LayerItem, LayerAction, Missal};
use crate::layers::precedence::{place_event, Placement};
use crate::locale::{LocalizationContext, Subject};
use crate::proper::{generate_weekdays, proper_of_time_entry, MovableFeasts};
use crate::registry::EventRegistry;

/// Builds the registry of one civil year by applying every calendar layer in precedence order.
///
/// The layers are applied as:
///
/// 1. the Proper of Time derived for the year,
/// 2. the Sanctorale of every Missal edition in force, oldest first,
/// 3. the legislated memorials,
/// 4. the wider region, national and diocesan calendars, each after its own Missals,
/// 5. the weekday placeholders of the dates left free.
///
/// Data errors in required resources abort the merge. Anomalies of single layer items, such as
/// an update of an absent event, are logged and recorded as messages.
pub struct LayeredMerger<'a, 'l> {
    data: &'a CalendarData,
    feasts: &'a MovableFeasts,
    registry: EventRegistry<'l>,
    /// Date given to each Sanctorale tag by the last Missal listing it.
    missal_dates: IndexMap<String, NaiveDate>,
}

impl<'a, 'l> LayeredMerger<'a, 'l> {
    pub fn new(
        l10n: &'l LocalizationContext,
        data: &'a CalendarData,
        feasts: &'a MovableFeasts,
    ) -> Self {
        LayeredMerger {
            data,
            feasts,
            registry: EventRegistry::new(l10n),
            missal_dates: IndexMap::new(),
        }
    }

    fn year(&self) -> i32 {
        self.feasts.year
    }

    /// Apply every layer and return the merged registry.
    pub fn merge(mut self) -> LitCalResult<EventRegistry<'l>> {
        let year = self.year();
        info!(year, "merging calendar layers");
        self.seed_proper_of_time()?;

        let data = self.data;
        for missal in data.missals.iter().filter(|m| m.applies_to(year)) {
            self.apply_missal(CalendarLayer::GeneralRoman, missal);
        }
        self.apply_items(CalendarLayer::GeneralRoman, &data.memorials);
        if year == 2022 {
            self.anticipate_nativity_john_baptist();
        }
        if let Some(doc) = &data.wider_region {
            self.apply_items(CalendarLayer::WiderRegion, &doc.items);
        }
        if let Some(doc) = &data.national {
            for missal in data.national_missals.iter().filter(|m| m.applies_to(year)) {
                self.apply_missal(CalendarLayer::National, missal);
            }
            self.apply_items(CalendarLayer::National, &doc.items);
        }
        if let Some(doc) = &data.diocesan {
            for missal in data.diocesan_missals.iter().filter(|m| m.applies_to(year)) {
                self.apply_missal(CalendarLayer::Diocesan, missal);
            }
            self.apply_items(CalendarLayer::Diocesan, &doc.items);
        }

        let weekdays = generate_weekdays(&mut self.registry, self.feasts);
        info!(
            year,
            events = self.registry.len(),
            weekdays,
            "merged calendar layers"
        );
        Ok(self.registry)
    }

    fn seed_proper_of_time(&mut self) -> LitCalResult<()> {
        let l10n = self.registry.l10n();
        for (key, date) in self.feasts.entries.iter() {
            let Some(entry) = proper_of_time_entry(key) else {
                warn!(key = %key, "no rank for Proper of Time key");
                continue;
            };
            let name = self.data.proper_of_time.get(key).ok_or_else(|| {
                LitCalError::MissingProperOfTimeName {
                    key: key.clone(),
                    locale: l10n.locale().to_string(),
                }
            })?;
            self.registry.add_event(LiturgicalEvent::new(
                key,
                name,
                *date,
                entry.color.to_vec(),
                entry.event_type,
                entry.grade,
                vec![],
            ));
        }
        debug!(events = self.registry.len(), "seeded Proper of Time");
        Ok(())
    }

    /// Apply the Sanctorale of `missal`.
    ///
    /// Records of new keys are placed by the coincidence rules. A record of a key already live
    /// revises its grade and name, and places the event again when the edition gives it a
    /// date other than the one of the previous edition.
    fn apply_missal(&mut self, layer: CalendarLayer, missal: &Missal) {
        let year = self.year();
        debug!(edition = %missal.edition, records = missal.records.len(), "applying missal");
        for record in missal.records.iter() {
            let name = missal.translated_name(&record.tag).unwrap_or(&record.name);
            let Some(date) = NaiveDate::from_ymd_opt(year, record.month, record.day) else {
                warn!(key = %record.tag, month = record.month, day = record.day, "invalid date in missal");
                continue;
            };
            let previous = self.missal_dates.insert(record.tag.clone(), date);
            if self.registry.contains(&record.tag) {
                match previous {
                    Some(from) if from != date => {
                        self.redate_from_missal(layer, &record.tag, missal, record.grade, name, date)
                    }
                    _ => {
                        self.registry.set_grade(&record.tag, record.grade).ok();
                        self.registry.set_name(&record.tag, name.to_string()).ok();
                        self.registry
                            .set_missal(&record.tag, missal.edition.clone())
                            .ok();
                    }
                }
                continue;
            }
            if self.registry.is_suppressed(&record.tag) {
                continue;
            }
            let mut event = LiturgicalEvent::new(
                &record.tag,
                name,
                date,
                record.color.clone(),
                LitEventType::Fixed,
                record.grade,
                record.common.clone(),
            );
            event.missal = Some(missal.edition.clone());
            event.decree = record.decree.clone();
            place_event(&mut self.registry, self.feasts, event);
        }
    }

    /// Revise the live Sanctorale event `key` and place it on the date `to` given by a later
    /// edition, against the occupants of that date.
    fn redate_from_missal(
        &mut self,
        layer: CalendarLayer,
        key: &str,
        missal: &Missal,
        grade: LitGrade,
        name: &str,
        to: NaiveDate,
    ) {
        let Some(mut event) = self.registry.delete_event(key) else {
            return;
        };
        let from = event.date();
        debug!(key, %from, %to, edition = %missal.edition, "missal edition moves event");
        event.date = to;
        event.grade = grade;
        event.name = name.to_string();
        event.missal = Some(missal.edition.clone());
        if let Placement::Placed { date } = place_event(&mut self.registry, self.feasts, event) {
            let l10n = self.registry.l10n();
            let grade_lcl = self.registry.get_event(key).map_or("", |e| e.grade_lcl());
            let msg = l10n.msg_moved(
                layer,
                Subject {
                    grade: grade_lcl,
                    name,
                },
                from,
                date,
                None,
                self.year(),
            );
            self.registry.push_message(msg);
        }
    }

    /// Apply the items of one layer in order, skipping those not in force this year.
    fn apply_items(&mut self, layer: CalendarLayer, items: &[LayerItem]) {
        let year = self.year();
        let locale = self.registry.l10n().locale();
        for item in items.iter() {
            if !item.metadata.applies_to(year) {
                debug!(key = %item.festivity.tag, %layer, "item not in force");
                continue;
            }
            let decree = item.metadata.decree(locale);
            match item.metadata.action {
                LayerAction::CreateNew => self.create_new(layer, &item.festivity, decree),
                LayerAction::SetProperty => match item.metadata.property {
                    Some(property) => {
                        self.set_property(layer, &item.festivity, property, decree)
                    }
                    None => warn!(key = %item.festivity.tag, "setProperty without a property"),
                },
                LayerAction::MakePatron => self.make_patron(layer, &item.festivity),
                LayerAction::MoveEvent => self.move_event(layer, &item.festivity, decree),
                LayerAction::Suppress => self.suppress(layer, &item.festivity, decree),
                LayerAction::Reinstate => self.reinstate(layer, &item.festivity),
            }
        }
    }

    fn report_update_error(&mut self, layer: CalendarLayer, key: &str, err: UpdateError) {
        match err {
            UpdateError::Unchanged { .. } => debug!(key, %err, "update not applied"),
            UpdateError::UnknownEvent(_) | UpdateError::Suppressed(_) => {
                warn!(key, %layer, %err, "layer item refers to an absent event");
                let msg = self.registry.l10n().msg_missing(layer, key, self.year());
                self.registry.push_message(msg);
            }
        }
    }

    fn resolve_date(&self, festivity: &Festivity) -> Option<(NaiveDate, LitEventType)> {
        let rule = festivity.date_rule()?;
        let event_type = match rule {
            DateRule::Fixed { .. } => LitEventType::Fixed,
            _ => LitEventType::Mobile,
        };
        rule.resolve(self.year(), &self.registry)
            .map(|date| (date, event_type))
    }

    fn create_new(&mut self, layer: CalendarLayer, festivity: &Festivity, decree: Option<String>) {
        let year = self.year();
        let l10n = self.registry.l10n();
        let key = festivity.tag.as_str();
        if self.registry.contains(key) {
            warn!(key, %layer, "createNew on an existing event, item skipped");
            let msg = l10n.msg_exists(layer, key, year);
            self.registry.push_message(msg);
            return;
        }
        let Some((date, event_type)) = self.resolve_date(festivity) else {
            warn!(key, %layer, "createNew without a valid date, item skipped");
            return;
        };
        let grade = festivity.grade.unwrap_or(LitGrade::OptionalMemorial);
        let name = festivity.name.as_deref().unwrap_or(key);
        let mut event = LiturgicalEvent::new(
            key,
            name,
            date,
            festivity
                .color
                .clone()
                .unwrap_or_else(|| vec![LitColor::White]),
            event_type,
            grade,
            festivity.common.clone().unwrap_or_default(),
        );
        event.decree = decree.clone();
        if let Placement::Placed { date } = place_event(&mut self.registry, self.feasts, event) {
            let grade_lcl = l10n.grade(self.registry.get_event(key).map_or(grade, |e| e.grade()));
            let msg = l10n.msg_created(
                layer,
                Subject {
                    grade: grade_lcl,
                    name,
                },
                date,
                decree.as_deref(),
                year,
            );
            self.registry.push_message(msg);
        }
    }

    fn set_property(
        &mut self,
        layer: CalendarLayer,
        festivity: &Festivity,
        property: FestivityProperty,
        decree: Option<String>,
    ) {
        let year = self.year();
        let l10n = self.registry.l10n();
        let key = festivity.tag.as_str();
        let (old_name, old_grade) = match self.registry.get_event(key) {
            Some(event) => (event.name().to_string(), event.grade()),
            None => {
                self.report_update_error(layer, key, UpdateError::UnknownEvent(key.to_string()));
                return;
            }
        };
        let result = match property {
            FestivityProperty::Name => match &festivity.name {
                Some(name) => self.registry.set_name(key, name.clone()).map(|_| {
                    Some(l10n.msg_name_changed(layer, &old_name, name, decree.as_deref(), year))
                }),
                None => {
                    warn!(key, %layer, "setProperty name without NAME");
                    return;
                }
            },
            FestivityProperty::Grade => match festivity.grade {
                Some(grade) => self.registry.set_grade(key, grade).map(|_| {
                    Some(l10n.msg_grade_changed(
                        layer,
                        &old_name,
                        old_grade,
                        grade,
                        decree.as_deref(),
                        year,
                    ))
                }),
                None => {
                    warn!(key, %layer, "setProperty grade without GRADE");
                    return;
                }
            },
            FestivityProperty::Color => match &festivity.color {
                Some(color) => self.registry.set_color(key, color.clone()).map(|_| None),
                None => {
                    warn!(key, %layer, "setProperty color without COLOR");
                    return;
                }
            },
            FestivityProperty::Common => match &festivity.common {
                Some(common) => self.registry.set_common(key, common.clone()).map(|_| None),
                None => {
                    warn!(key, %layer, "setProperty common without COMMON");
                    return;
                }
            },
        };
        match result {
            Ok(msg) => {
                if let Some(decree) = decree {
                    self.registry.set_decree(key, decree).ok();
                }
                if let Some(msg) = msg {
                    self.registry.push_message(msg);
                }
            }
            Err(err) => self.report_update_error(layer, key, err),
        }
    }

    /// Mark a live event as a patron, optionally renaming it and raising its grade.
    fn make_patron(&mut self, layer: CalendarLayer, festivity: &Festivity) {
        let key = festivity.tag.as_str();
        if let Err(err) = self.registry.set_patron(key, true) {
            self.report_update_error(layer, key, err);
            return;
        }
        if let Some(name) = &festivity.name {
            self.registry.set_name(key, name.clone()).ok();
        }
        if let Some(grade) = festivity.grade {
            if self.registry.get_event(key).is_some_and(|e| grade > e.grade()) {
                self.registry.set_grade(key, grade).ok();
            }
        }
        if let Some(event) = self.registry.get_event(key) {
            let msg = self.registry.l10n().msg_patron(
                layer,
                Subject {
                    grade: event.grade_lcl(),
                    name: event.name(),
                },
                self.year(),
            );
            self.registry.push_message(msg);
        }
    }

    /// Move a live event, placing it again against the occupants of its new date.
    fn move_event(&mut self, layer: CalendarLayer, festivity: &Festivity, decree: Option<String>) {
        let key = festivity.tag.as_str();
        if !self.registry.contains(key) {
            self.report_update_error(layer, key, UpdateError::UnknownEvent(key.to_string()));
            return;
        }
        let Some((to, _)) = self.resolve_date(festivity) else {
            warn!(key, %layer, "moveEvent without a valid date, item skipped");
            return;
        };
        let Some(mut event) = self.registry.delete_event(key) else {
            return;
        };
        let from = event.date();
        event.date = to;
        if decree.is_some() {
            event.decree = decree.clone();
        }
        let name = event.name().to_string();
        if let Placement::Placed { date } = place_event(&mut self.registry, self.feasts, event) {
            let l10n = self.registry.l10n();
            let grade_lcl = self.registry.get_event(key).map_or("", |e| e.grade_lcl());
            let msg = l10n.msg_moved(
                layer,
                Subject {
                    grade: grade_lcl,
                    name: &name,
                },
                from,
                date,
                decree.as_deref(),
                self.year(),
            );
            self.registry.push_message(msg);
        }
    }

    fn suppress(&mut self, layer: CalendarLayer, festivity: &Festivity, decree: Option<String>) {
        let key = festivity.tag.as_str();
        let subject = self
            .registry
            .get_event(key)
            .map(|e| (e.grade_lcl().to_string(), e.name().to_string()));
        match self.registry.remove_event(key) {
            Ok(()) => {
                let (grade, name) = subject.unwrap_or_default();
                let msg = self.registry.l10n().msg_suppressed(
                    layer,
                    Subject {
                        grade: &grade,
                        name: &name,
                    },
                    decree.as_deref(),
                    self.year(),
                );
                self.registry.push_message(msg);
            }
            Err(err) => self.report_update_error(layer, key, err),
        }
    }

    fn reinstate(&mut self, layer: CalendarLayer, festivity: &Festivity) {
        let key = festivity.tag.as_str();
        match self.registry.reinstate(key) {
            Ok(()) => {
                if let Some(event) = self.registry.get_event(key) {
                    let msg = self.registry.l10n().msg_reinstated(
                        layer,
                        Subject {
                            grade: event.grade_lcl(),
                            name: event.name(),
                        },
                        self.year(),
                    );
                    self.registry.push_message(msg);
                }
            }
            Err(err) => self.report_update_error(layer, key, err),
        }
    }

    /// In 2022 the Nativity of Saint John the Baptist coincides with the Sacred Heart and is
    /// anticipated to June 23 (Prot. N. 113/22).
    fn anticipate_nativity_john_baptist(&mut self) {
        const KEY: &str = "NativityJohnBaptist";
        let date = nd(2022, 6, 23);
        if self.registry.move_event(KEY, date).is_ok() {
            if let Some(event) = self.registry.get_event(KEY) {
                let msg = self
                    .registry
                    .l10n()
                    .msg_nativity_john_baptist_2022(event.name(), date);
                self.registry.push_message(msg);
            }
        }
    }
}
