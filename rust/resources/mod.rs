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

//! Loading of calendar resources from a data directory.
//!
//! The directory is laid out as:
//!
//! ```text
//! propriumdetempore/{locale}.json          Proper of Time names by key
//! missals/{EDITION}/{EDITION}.json         Sanctorale records
//! missals/{EDITION}/i18n/{locale}.json     Sanctorale names by tag (optional)
//! memorials/legislated.json                legislated memorials
//! nations/{ID}/{ID}.json                   national calendars
//! wider_regions/{ID}/{ID}.json             wider region calendars
//! dioceses/{ID}/{ID}.json                  diocesan calendars
//! ```
//!
//! Every required file that is absent or malformed fails the load with the offending path.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::calendar::{CalendarSettings, Jurisdiction};
use crate::error::{LitCalError, LitCalResult};
use crate::layers::{CalendarData, LayerDocument, Missal, SanctoraleRecord};

/// Editions of the Roman Missal making up the General Roman Calendar, oldest first.
pub const GENERAL_MISSALS: [&str; 3] = [
    "EDITIO_TYPICA_1970",
    "EDITIO_TYPICA_TERTIA_2002",
    "EDITIO_TYPICA_TERTIA_EMENDATA_2008",
];

fn read_json<T: DeserializeOwned>(path: &Path) -> LitCalResult<T> {
    let text = fs::read_to_string(path).map_err(|source| LitCalError::ResourceMissing {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LitCalError::ResourceMalformed {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional_json<T: DeserializeOwned>(path: &Path) -> LitCalResult<Option<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "optional resource absent");
        return Ok(None);
    }
    read_json(path).map(Some)
}

fn language(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

/// Reads the resources a computation needs from a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLoader {
    root: PathBuf,
}

impl ResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ResourceLoader { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn layer_path(&self, dir: &str, id: &str) -> PathBuf {
        self.root.join(dir).join(id).join(format!("{}.json", id))
    }

    fn layer(&self, dir: &str, kind: &'static str, id: &str) -> LitCalResult<LayerDocument> {
        let path = self.layer_path(dir, id);
        if !path.exists() {
            return Err(LitCalError::UnknownCalendar {
                kind,
                id: id.to_string(),
            });
        }
        read_json(&path)
    }

    /// Proper of Time names for `locale`, falling back to the file of its language.
    fn proper_of_time(&self, locale: &str) -> LitCalResult<IndexMap<String, String>> {
        let dir = self.root.join("propriumdetempore");
        let exact = dir.join(format!("{}.json", locale));
        if exact.exists() {
            return read_json(&exact);
        }
        let fallback = dir.join(format!("{}.json", language(locale)));
        if fallback.exists() {
            return read_json(&fallback);
        }
        read_json(&exact)
    }

    fn missal(&self, edition: &str, locale: &str) -> LitCalResult<Missal> {
        let records: Vec<SanctoraleRecord> = read_json(&self.layer_path("missals", edition))?;
        let i18n = self.root.join("missals").join(edition).join("i18n");
        let names = match read_optional_json(&i18n.join(format!("{}.json", locale)))? {
            Some(names) => Some(names),
            None => read_optional_json(&i18n.join(format!("{}.json", language(locale))))?,
        };
        Ok(Missal::new(edition, records, names))
    }

    /// Missals listed by a layer document, in the order listed.
    fn missals(&self, editions: &[String], locale: &str) -> LitCalResult<Vec<Missal>> {
        editions
            .iter()
            .map(|edition| self.missal(edition, locale))
            .collect()
    }

    /// Read every resource required by `settings`.
    ///
    /// The national calendar is read first since its defaults may decide the locale of the
    /// remaining resources.
    pub fn load(&self, settings: &CalendarSettings) -> LitCalResult<CalendarData> {
        let (national_id, diocesan) = match &settings.calendar {
            Jurisdiction::General => (None, None),
            Jurisdiction::National { id } => (Some(id.clone()), None),
            Jurisdiction::Diocesan { id } => {
                let doc = self.layer("dioceses", "diocesan", id)?;
                (doc.metadata.nation.clone(), Some(doc))
            }
        };
        let national = match &national_id {
            Some(id) => Some(self.layer("nations", "national", id)?),
            None => None,
        };
        let wider_region = match national
            .as_ref()
            .and_then(|doc| doc.metadata.wider_region.as_ref())
        {
            Some(id) => Some(read_json(&self.layer_path("wider_regions", id))?),
            None => None,
        };

        let mut data = CalendarData {
            national,
            wider_region,
            diocesan,
            ..CalendarData::default()
        };
        let locale = settings.resolve(&data.defaults()).locale;
        info!(root = %self.root.display(), locale = %locale, "loading calendar resources");

        data.proper_of_time = self.proper_of_time(&locale)?;
        data.missals = GENERAL_MISSALS
            .iter()
            .map(|edition| self.missal(edition, &locale))
            .collect::<LitCalResult<Vec<Missal>>>()?;
        data.memorials = read_json(&self.root.join("memorials").join("legislated.json"))?;
        if let Some(doc) = &data.national {
            data.national_missals = self.missals(&doc.metadata.missals, &locale)?;
        }
        if let Some(doc) = &data.diocesan {
            data.diocesan_missals = self.missals(&doc.metadata.missals, &locale)?;
        }
        debug!(
            missals = %data
                .missals
                .iter()
                .chain(data.national_missals.iter())
                .chain(data.diocesan_missals.iter())
                .map(|m| m.edition.as_str())
                .join(", "),
            "loaded missals"
        );
        Ok(data)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use tempfile::TempDir;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        create_dir_all(path.parent().unwrap()).unwrap();
        write(path, content).unwrap();
    }

    fn fixture_data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_file(root, "propriumdetempore/en.json", r#"{"Easter": "Easter Sunday"}"#);
        for edition in GENERAL_MISSALS.iter() {
            write_file(
                root,
                &format!("missals/{0}/{0}.json", edition),
                r#"[{"TAG": "StAgnes", "NAME": "Saint Agnes", "GRADE": 3, "COLOR": ["red"],
                     "COMMON": [], "MONTH": 1, "DAY": 21}]"#,
            );
        }
        write_file(
            root,
            "missals/EDITIO_TYPICA_1970/i18n/it.json",
            r#"{"StAgnes": "Sant'Agnese"}"#,
        );
        write_file(root, "memorials/legislated.json", "[]");
        dir
    }

    #[test]
    fn test_load_general() {
        let dir = fixture_data_dir();
        let data = ResourceLoader::new(dir.path())
            .load(&CalendarSettings::new(2024))
            .unwrap();
        assert_eq!(data.proper_of_time["Easter"], "Easter Sunday");
        assert_eq!(data.missals.len(), 3);
        assert_eq!(data.missals[0].year_published, 1970);
        assert!(data.missals[0].names.is_none());
        assert!(data.national.is_none());
    }

    #[test]
    fn test_missing_proper_of_time() {
        let dir = fixture_data_dir();
        let mut settings = CalendarSettings::new(2024);
        settings.locale = Some("it".to_string());
        let err = ResourceLoader::new(dir.path()).load(&settings).unwrap_err();
        match err {
            LitCalError::ResourceMissing { path, .. } => {
                assert!(path.ends_with("propriumdetempore/it.json"))
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[test]
    fn test_malformed_missal() {
        let dir = fixture_data_dir();
        write_file(
            dir.path(),
            "missals/EDITIO_TYPICA_TERTIA_2002/EDITIO_TYPICA_TERTIA_2002.json",
            r#"[{"TAG": "StAgnes"}]"#,
        );
        let err = ResourceLoader::new(dir.path())
            .load(&CalendarSettings::new(2024))
            .unwrap_err();
        assert!(matches!(err, LitCalError::ResourceMalformed { .. }));
        assert!(err.to_string().contains("EDITIO_TYPICA_TERTIA_2002.json"));
    }

    #[test]
    fn test_national_calendar() {
        let dir = fixture_data_dir();
        write_file(
            dir.path(),
            "nations/IT/IT.json",
            r#"{"metadata": {"nation": "IT", "missals": ["IT_1983"],
                             "settings": {"locale": "it"}}, "items": []}"#,
        );
        write_file(dir.path(), "propriumdetempore/it.json", r#"{"Easter": "Pasqua"}"#);
        let mut settings = CalendarSettings::new(2024);
        settings.calendar = Jurisdiction::National {
            id: "IT".to_string(),
        };
        let loader = ResourceLoader::new(dir.path());
        let err = loader.load(&settings).unwrap_err();
        assert!(matches!(err, LitCalError::ResourceMissing { .. }));

        write_file(dir.path(), "missals/IT_1983/IT_1983.json", "[]");
        let data = loader.load(&settings).unwrap();
        assert_eq!(data.proper_of_time["Easter"], "Pasqua");
        assert_eq!(
            data.missals[0].translated_name("StAgnes"),
            Some("Sant'Agnese")
        );
        assert_eq!(data.national_missals[0].year_published, 1983);

        settings.calendar = Jurisdiction::National {
            id: "XX".to_string(),
        };
        assert!(matches!(
            loader.load(&settings).unwrap_err(),
            LitCalError::UnknownCalendar { kind: "national", .. }
        ));
    }

    #[test]
    fn test_diocesan_missals() {
        let dir = fixture_data_dir();
        write_file(
            dir.path(),
            "dioceses/DX/DX.json",
            r#"{"metadata": {"diocese": "DX", "missals": ["DX_2020"]}, "items": []}"#,
        );
        let mut settings = CalendarSettings::new(2024);
        settings.calendar = Jurisdiction::Diocesan {
            id: "DX".to_string(),
        };
        let loader = ResourceLoader::new(dir.path());
        match loader.load(&settings).unwrap_err() {
            LitCalError::ResourceMissing { path, .. } => {
                assert!(path.ends_with("missals/DX_2020/DX_2020.json"))
            }
            other => panic!("unexpected error: {}", other),
        }

        write_file(
            dir.path(),
            "missals/DX_2020/DX_2020.json",
            r#"[{"TAG": "StDX", "NAME": "Saint DX", "GRADE": 4, "COLOR": ["white"],
                 "MONTH": 3, "DAY": 4}]"#,
        );
        let data = loader.load(&settings).unwrap();
        assert!(data.national_missals.is_empty());
        assert_eq!(data.diocesan_missals.len(), 1);
        assert_eq!(data.diocesan_missals[0].year_published, 2020);
        assert_eq!(data.diocesan_missals[0].records[0].tag, "StDX");
    }
}
