//! Selection state and its caller-supplied defaults.

use std::collections::BTreeMap;

use gn_catalog::SeriesKey;
use gn_core::{Period, PeriodSet};

/// The navigation state of one rendered page.
///
/// Parsed from the URL on load, mutated by menu handlers, serialized back
/// into the next URL on navigation. There is no hidden state: a page load
/// with the serialized query reproduces the selection exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub host: Option<String>,
    pub service: Option<String>,
    /// Selected series in menu order, duplicate-free.
    pub series: Vec<SeriesKey>,
    /// Which period sections the page renders.
    pub periods: PeriodSet,
    /// Graph geometry; `None` stands for the `default` sentinel and is
    /// omitted from query strings.
    pub geometry: Option<String>,
    /// Time-axis shift in seconds. `None` means "now" and is omitted from
    /// query strings, as is an explicit zero.
    pub offset_secs: Option<i64>,
    pub fixed_scale: bool,
    pub controls_expanded: bool,
    /// Which period sections are expanded. Distinct from `periods`: a
    /// section can render collapsed.
    pub expanded_periods: PeriodSet,
    /// Unrecognized query fragments, carried verbatim in original order.
    pub pass_through: Vec<String>,
}

impl Selection {
    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    pub fn clear_periods(&mut self) {
        self.periods = PeriodSet::EMPTY;
    }

    pub fn toggle_controls_expanded(&mut self) {
        self.controls_expanded = !self.controls_expanded;
    }

    pub fn toggle_period_expanded(&mut self, period: Period) {
        self.expanded_periods.toggle(period);
    }

    pub fn period_expanded(&self, period: Period) -> bool {
        self.expanded_periods.contains(period)
    }
}

/// Fallbacks applied where the query string is silent, supplied by the
/// embedding page (server configuration or user preferences).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionDefaults {
    /// Periods rendered when the query carries no `period` key at all.
    pub periods: PeriodSet,
    /// Periods expanded when the query carries no `expand_period` key at
    /// all. An explicitly empty `expand_period=` still collapses every
    /// section; only the absent key falls through to this.
    pub expanded_periods: PeriodSet,
    /// Series preselected per service when the query selects none.
    pub series_by_service: BTreeMap<String, Vec<SeriesKey>>,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            periods: [Period::Day, Period::Week, Period::Month, Period::Year]
                .into_iter()
                .collect(),
            expanded_periods: [Period::Day].into_iter().collect(),
            series_by_service: BTreeMap::new(),
        }
    }
}

/// Label for the expand/collapse button of a panel in the given state.
pub fn expansion_indicator(expanded: bool) -> &'static str {
    if expanded { "-" } else { "+" }
}

/// Fill an empty series selection.
///
/// The defaults table entry for the current service applies first, filtered
/// to what the menu actually offers; with no table entry, or when the filter
/// leaves nothing, every menu entry is selected. A selection is never left
/// implicitly empty while the menu has entries.
pub fn select_default_series(
    selection: &mut Selection,
    defaults: &SelectionDefaults,
    menu: &[SeriesKey],
) {
    if !selection.series.is_empty() {
        return;
    }
    let wanted = selection
        .service
        .as_deref()
        .and_then(|service| defaults.series_by_service.get(service));
    let picked: Vec<SeriesKey> = match wanted {
        Some(keys) => menu.iter().filter(|key| keys.contains(key)).cloned().collect(),
        None => menu.to_vec(),
    };
    selection.series = if picked.is_empty() { menu.to_vec() } else { picked };
}
