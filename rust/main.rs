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

use litcal::{compute_from_dir, CalendarSettings, LitCalError, JSON};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: litcal <settings.json> [data directory]";

fn run(settings_path: PathBuf, data_dir: PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&settings_path).map_err(|source| {
        LitCalError::ResourceMissing {
            path: settings_path.clone(),
            source,
        }
    })?;
    let settings = CalendarSettings::from_json(&text).map_err(|source| {
        LitCalError::ResourceMalformed {
            path: settings_path.clone(),
            source,
        }
    })?;
    let result = compute_from_dir(&settings, data_dir)?;
    Ok(result.to_json_pretty()?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(settings_path) = args.next().map(PathBuf::from) else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let data_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));

    match run(settings_path, data_dir) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "calendar computation failed");
            ExitCode::FAILURE
        }
    }
}
