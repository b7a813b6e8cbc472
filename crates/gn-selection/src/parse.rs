//! Decoding a URL query string into a [`Selection`].

use gn_catalog::SeriesKey;
use gn_core::numeric::lenient_i64;
use gn_core::query;
use gn_core::PeriodSet;

use crate::menu::NONE_LABEL;
use crate::selection::{Selection, SelectionDefaults};

/// Keys the selection machinery owns. They are consumed on parse and
/// re-emitted from current state on serialization, so a stale copy never
/// leaks into pass-through. `rrdopts` is deliberately absent: the selection
/// layer carries it verbatim for the graph renderer.
pub const RECOGNIZED_KEYS: [&str; 10] = [
    "host",
    "service",
    "group",
    "db",
    "geom",
    "offset",
    "period",
    "expand_period",
    "expand_controls",
    "fixedscale",
];

/// Decode a query string against the given defaults.
///
/// Recognized keys parse leniently: empty or placeholder menu values mean
/// "nothing chosen", non-numeric offsets mean "now", unrecognized period
/// names drop out. Nothing in here fails; a hand-mangled URL degrades to
/// whatever could be understood.
pub fn parse_selection_from_query(query_string: &str, defaults: &SelectionDefaults) -> Selection {
    let mut selection = Selection {
        host: menu_value(query::value_of(query_string, "host")),
        service: menu_value(query::value_of(query_string, "service")),
        geometry: query::value_of(query_string, "geom")
            .filter(|value| !value.is_empty() && value != "default"),
        offset_secs: parse_offset(query::value_of(query_string, "offset")),
        periods: match query::value_of(query_string, "period") {
            Some(csv) => PeriodSet::parse_csv(&csv),
            None => defaults.periods,
        },
        // An empty `expand_period=` collapses every section; only the fully
        // absent key falls back to the defaults.
        expanded_periods: match query::value_of(query_string, "expand_period") {
            Some(csv) => PeriodSet::parse_csv(&csv),
            None => defaults.expanded_periods,
        },
        controls_expanded: query::has_flag(query_string, "expand_controls"),
        fixed_scale: query::has_flag(query_string, "fixedscale"),
        ..Selection::default()
    };

    for fragment in query::fragments(query_string) {
        if fragment.key() == "db" {
            if let Some(value) = fragment.value() {
                for key in SeriesKey::expand_compact(&value) {
                    if !selection.series.contains(&key) {
                        selection.series.push(key);
                    }
                }
            }
        } else if !RECOGNIZED_KEYS.contains(&fragment.key()) {
            selection.pass_through.push(fragment.raw().to_string());
        }
    }

    selection
}

/// Menu values: empty or the placeholder row mean "nothing chosen".
fn menu_value(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != NONE_LABEL)
}

/// `offset` reads as absent for "now", zero, or anything non-numeric.
fn parse_offset(value: Option<String>) -> Option<i64> {
    value
        .filter(|v| v != "now")
        .as_deref()
        .and_then(lenient_i64)
        .filter(|&n| n != 0)
}
