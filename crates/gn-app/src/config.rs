//! Caller-supplied navigation defaults, loaded from a YAML file.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gn_catalog::SeriesKey;
use gn_core::{Period, PeriodSet};
use gn_selection::SelectionDefaults;

use crate::error::{AppError, AppResult};

/// On-disk shape of the defaults file. Every key is optional; period names
/// and series entries use the same spellings query strings do (`day`,
/// `cpu,user,system`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsFile {
    #[serde(default)]
    pub periods: Option<Vec<String>>,
    #[serde(default)]
    pub expanded_periods: Option<Vec<String>>,
    #[serde(default)]
    pub series_by_service: BTreeMap<String, Vec<String>>,
}

/// Load defaults from a YAML file.
pub fn load_defaults(path: &Path) -> AppResult<SelectionDefaults> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::DefaultsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: DefaultsFile = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Defaults(format!("Failed to parse defaults YAML: {e}")))?;
    defaults_from_file(file)
}

/// Resolve the file shape into domain defaults. Unlike query strings, this
/// file is configuration: an unknown period name or a malformed series
/// entry is an error, not something to skip.
pub fn defaults_from_file(file: DefaultsFile) -> AppResult<SelectionDefaults> {
    let stock = SelectionDefaults::default();
    let periods = match file.periods {
        Some(names) => parse_periods(&names)?,
        None => stock.periods,
    };
    let expanded_periods = match file.expanded_periods {
        Some(names) => parse_periods(&names)?,
        None => stock.expanded_periods,
    };
    let mut series_by_service = BTreeMap::new();
    for (service, entries) in file.series_by_service {
        let mut keys: Vec<SeriesKey> = Vec::new();
        for entry in &entries {
            let expanded = SeriesKey::expand_compact(entry);
            if expanded.is_empty() {
                return Err(AppError::Defaults(format!(
                    "series entry '{entry}' for service '{service}' is not in source,line form"
                )));
            }
            for key in expanded {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        series_by_service.insert(service, keys);
    }
    Ok(SelectionDefaults {
        periods,
        expanded_periods,
        series_by_service,
    })
}

fn parse_periods(names: &[String]) -> AppResult<PeriodSet> {
    let mut set = PeriodSet::EMPTY;
    for name in names {
        let period = Period::from_str(name).map_err(|e| AppError::Defaults(e.to_string()))?;
        set.insert(period);
    }
    Ok(set)
}
