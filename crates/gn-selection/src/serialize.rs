//! Encoding a [`Selection`] back into a URL query string.

use gn_catalog::SeriesKey;
use gn_core::query;

use crate::selection::Selection;

/// Serialize a selection in the canonical emission order: host, service, db
/// groups, pass-through, geom, offset, period, expand_period, fixedscale,
/// expand_controls.
///
/// `expand_period` is always emitted, even empty, so the next page load can
/// tell "collapse everything" from "no opinion". Optional keys drop out
/// entirely when at their sentinel: no `geom=default`, no `offset=0`.
pub fn serialize_to_query(selection: &Selection) -> String {
    let mut args: Vec<String> = Vec::new();
    if let Some(host) = &selection.host {
        args.push(format!("host={}", query::escape(host)));
    }
    if let Some(service) = &selection.service {
        args.push(format!("service={}", query::escape(service)));
    }
    for group in group_compact(&selection.series) {
        args.push(format!("db={group}"));
    }
    args.extend(selection.pass_through.iter().cloned());
    if let Some(geometry) = &selection.geometry {
        args.push(format!("geom={}", query::escape(geometry)));
    }
    if let Some(offset) = selection.offset_secs {
        if offset != 0 {
            args.push(format!("offset={offset}"));
        }
    }
    if !selection.periods.is_empty() {
        args.push(format!("period={}", selection.periods.to_csv()));
    }
    args.push(format!("expand_period={}", selection.expanded_periods.to_csv()));
    if selection.fixed_scale {
        args.push("fixedscale".to_string());
    }
    if selection.controls_expanded {
        args.push("expand_controls".to_string());
    }
    args.join("&")
}

/// One compact `source,line1,line2` value per distinct source, sources and
/// lines in selection order. Components are escaped individually so the
/// commas stay structural.
fn group_compact(series: &[SeriesKey]) -> Vec<String> {
    let mut groups: Vec<(&str, String)> = Vec::new();
    for key in series {
        match groups.iter_mut().find(|(source, _)| *source == key.source) {
            Some((_, compact)) => {
                compact.push(',');
                compact.push_str(&query::escape(&key.line));
            }
            None => {
                let compact =
                    format!("{},{}", query::escape(&key.source), query::escape(&key.line));
                groups.push((key.source.as_str(), compact));
            }
        }
    }
    groups.into_iter().map(|(_, compact)| compact).collect()
}

/// Where a navigation lands: the page path plus the serialized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub query: String,
}

impl NavigationTarget {
    pub fn url(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }
}

/// The full-page reload a menu update performs.
pub fn navigation_target(path: &str, selection: &Selection) -> NavigationTarget {
    NavigationTarget {
        path: path.to_string(),
        query: serialize_to_query(selection),
    }
}
