//! Catalog model: hosts, their services, and the series under each service.
//!
//! Order is significant everywhere. Menus render in catalog order and every
//! lookup resolves ties by first match, so the model preserves the ingest
//! order exactly and never sorts.

use core::fmt;

/// One selectable metric line, addressed by its data source and line name.
///
/// The compact form `source,line` is how series travel in `db=` query
/// values and how menu rows are labeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey {
    pub source: String,
    pub line: String,
}

impl SeriesKey {
    pub fn new(source: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: line.into(),
        }
    }

    /// Expand a compact `source,line1,line2` value into one key per line.
    /// A value with no line part expands to nothing.
    pub fn expand_compact(value: &str) -> Vec<SeriesKey> {
        let mut parts = value.split(',');
        let Some(source) = parts.next() else {
            return Vec::new();
        };
        parts.map(|line| SeriesKey::new(source, line)).collect()
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.source, self.line)
    }
}

/// Metric lines grouped under one data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesGroup {
    pub source: String,
    pub lines: Vec<String>,
}

impl SeriesGroup {
    pub fn keys(&self) -> impl Iterator<Item = SeriesKey> + '_ {
        self.lines
            .iter()
            .map(move |line| SeriesKey::new(self.source.clone(), line.clone()))
    }
}

/// A service and its data series, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub groups: Vec<SeriesGroup>,
}

impl ServiceEntry {
    /// Every series key under this service, flattened in catalog order.
    pub fn series_keys(&self) -> Vec<SeriesKey> {
        self.groups.iter().flat_map(SeriesGroup::keys).collect()
    }
}

/// One monitored host and its services, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub services: Vec<ServiceEntry>,
}

impl HostEntry {
    /// First service with the given name, if any.
    pub fn service(&self, name: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|service| service.name == name)
    }
}

/// The full host, service and series catalog for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub hosts: Vec<HostEntry>,
}

impl Catalog {
    pub fn new(hosts: Vec<HostEntry>) -> Self {
        Self { hosts }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
