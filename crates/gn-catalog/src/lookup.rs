//! Host and service lookup with explicit miss results.

use crate::model::{Catalog, HostEntry, SeriesKey, ServiceEntry};

/// Outcome of looking a host up by its menu label.
///
/// A miss carries the name so the caller can surface it to the user once,
/// at the one place that decided to care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostLookup<'a> {
    Found(&'a HostEntry),
    NotFound(String),
}

impl<'a> HostLookup<'a> {
    pub fn found(&self) -> Option<&'a HostEntry> {
        match self {
            HostLookup::Found(entry) => Some(entry),
            HostLookup::NotFound(_) => None,
        }
    }
}

impl Catalog {
    /// Look a host up by name; first match wins.
    pub fn find_host(&self, name: &str) -> HostLookup<'_> {
        match self.hosts.iter().find(|host| host.name == name) {
            Some(entry) => HostLookup::Found(entry),
            None => HostLookup::NotFound(name.to_string()),
        }
    }

    /// Like [`Catalog::find_host`], for callers that degrade silently.
    pub fn host(&self, name: &str) -> Option<&HostEntry> {
        self.find_host(name).found()
    }

    /// First host in catalog order carrying a service with this name.
    pub fn first_host_with_service(&self, service: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|host| host.service(service).is_some())
    }

    /// Service names of one host in catalog order; a missing host lists
    /// nothing.
    pub fn service_names(&self, host: &str) -> Vec<String> {
        self.host(host)
            .map(|entry| entry.services.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Every service name across all hosts, first appearance first,
    /// duplicates dropped. This is the service menu of the "any host" mode.
    pub fn all_service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for host in &self.hosts {
            for service in &host.services {
                if !names.iter().any(|known| known == &service.name) {
                    names.push(service.name.clone());
                }
            }
        }
        names
    }

    /// Series available for a host/service pair.
    ///
    /// A present host argument always decides which entry is searched, even
    /// when it matches nothing. The first-host-with-service fallback applies
    /// only when no host is given. Anything unresolved is an empty list.
    pub fn series_for(&self, host: Option<&str>, service: Option<&str>) -> Vec<SeriesKey> {
        let entry = match host {
            Some(name) => self.host(name),
            None => service.and_then(|wanted| self.first_host_with_service(wanted)),
        };
        let (Some(entry), Some(service)) = (entry, service) else {
            return Vec::new();
        };
        entry
            .service(service)
            .map(ServiceEntry::series_keys)
            .unwrap_or_default()
    }
}
