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

use crate::calendar::{CalendarSettings, LiturgicalEvent, ResolvedSettings};
use crate::json::JSON;

impl JSON for LiturgicalEvent {}
impl JSON for CalendarSettings {}
impl JSON for ResolvedSettings {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{nd, Jurisdiction, LitColor, LitEventType, LitGrade, YearType};

    #[test]
    fn test_event_json() {
        let mut event = LiturgicalEvent::new(
            "StLawrence",
            "Saint Lawrence, deacon and martyr",
            nd(2024, 8, 10),
            vec![LitColor::Red],
            LitEventType::Fixed,
            LitGrade::Feast,
            vec!["Martyrs:For One Martyr".to_string()],
        );
        event.psalter_week = Some(2);
        let js = event.to_json().unwrap();
        assert!(js.contains("\"event_key\":\"StLawrence\""));
        assert!(js.contains("\"date\":\"2024-08-10\""));
        assert!(js.contains("\"grade\":4"));
        assert!(!js.contains("is_vigil_for"));
        let event2 = LiturgicalEvent::from_json(&js).unwrap();
        assert_eq!(event, event2);
    }

    #[test]
    fn test_settings_json() {
        let js = r#"{
            "year": 2022,
            "year_type": "LITURGICAL",
            "epiphany": "SUNDAY_JAN2_JAN8",
            "calendar": {"Diocesan": {"id": "TURIN"}}
        }"#;
        let settings = CalendarSettings::from_json(js).unwrap();
        assert_eq!(settings.year_type, YearType::Liturgical);
        assert_eq!(
            settings.calendar,
            Jurisdiction::Diocesan {
                id: "TURIN".to_string()
            }
        );
        assert_eq!(settings.locale, None);
        let settings2 = CalendarSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(settings, settings2);
    }
}
