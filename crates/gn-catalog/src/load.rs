//! Ingest of the externally supplied nested-array catalog.
//!
//! The graph backend hands the catalog over as nested JSON arrays:
//! `[[host, [service, [source, line, ...], ...], ...], ...]`. Names always
//! sit at index 0 of their array; everything after is children.

use std::path::Path;

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Catalog, HostEntry, SeriesGroup, ServiceEntry};

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    catalog_from_json(&content)
}

/// Parse a catalog from JSON text.
pub fn catalog_from_json(json: &str) -> CatalogResult<Catalog> {
    let value: Value = serde_json::from_str(json)?;
    catalog_from_value(&value)
}

/// Build a catalog from an already-parsed JSON value.
pub fn catalog_from_value(value: &Value) -> CatalogResult<Catalog> {
    let entries = as_array(value, "catalog")?;
    let mut hosts = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        hosts.push(host_from_value(entry, &format!("catalog[{i}]"))?);
    }
    Ok(Catalog::new(hosts))
}

fn host_from_value(value: &Value, at: &str) -> CatalogResult<HostEntry> {
    let parts = as_array(value, at)?;
    let name = name_of(parts, at)?;
    let mut services = Vec::new();
    for (i, part) in parts.iter().skip(1).enumerate() {
        services.push(service_from_value(part, &format!("{at}[{}]", i + 1))?);
    }
    Ok(HostEntry { name, services })
}

fn service_from_value(value: &Value, at: &str) -> CatalogResult<ServiceEntry> {
    let parts = as_array(value, at)?;
    let name = name_of(parts, at)?;
    let mut groups = Vec::new();
    for (i, part) in parts.iter().skip(1).enumerate() {
        groups.push(group_from_value(part, &format!("{at}[{}]", i + 1))?);
    }
    Ok(ServiceEntry { name, groups })
}

fn group_from_value(value: &Value, at: &str) -> CatalogResult<SeriesGroup> {
    let parts = as_array(value, at)?;
    let source = name_of(parts, at)?;
    let mut lines = Vec::new();
    for (i, part) in parts.iter().skip(1).enumerate() {
        let line = part.as_str().ok_or_else(|| CatalogError::Shape {
            at: format!("{at}[{}]", i + 1),
            expected: "line name string",
        })?;
        lines.push(line.to_string());
    }
    Ok(SeriesGroup { source, lines })
}

fn as_array<'a>(value: &'a Value, at: &str) -> CatalogResult<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| CatalogError::Shape {
        at: at.to_string(),
        expected: "array",
    })
}

fn name_of(parts: &[Value], at: &str) -> CatalogResult<String> {
    parts
        .first()
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CatalogError::Shape {
            at: format!("{at}[0]"),
            expected: "name string",
        })
}
