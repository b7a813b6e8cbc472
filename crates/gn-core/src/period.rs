//! Relative time periods and their fixed lookback windows.
//!
//! A period names a predefined window ending "now". The dashboard renders
//! one graph section per selected period, and the zoom engine falls back to
//! the same lookbacks when a graph URL carries a `period` fragment.

use core::fmt;
use core::str::FromStr;

use crate::error::GnError;

/// A predefined relative time window.
///
/// Canonical order is day, week, month, quarter, year. Menus, CSV encodings
/// and [`PeriodSet`] iteration all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// All periods in canonical order.
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    /// Lowercase name used in query strings and menu labels.
    pub fn name(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Seconds looked back from the window end (33 hours, 9 days, 35 days,
    /// 98 days, 400 days).
    pub fn lookback_secs(self) -> i64 {
        match self {
            Period::Day => 118_800,
            Period::Week => 777_600,
            Period::Month => 3_024_000,
            Period::Quarter => 8_467_200,
            Period::Year => 34_560_000,
        }
    }

    fn from_name(name: &str) -> Option<Period> {
        Period::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = GnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::from_name(s).ok_or_else(|| GnError::UnknownPeriod {
            name: s.to_string(),
        })
    }
}

/// A set of periods packed into one byte, iterated in canonical order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PeriodSet {
    mask: u8,
}

impl PeriodSet {
    pub const EMPTY: PeriodSet = PeriodSet { mask: 0 };

    /// The set containing every period.
    pub fn all() -> PeriodSet {
        Period::ALL.into_iter().collect()
    }

    fn bit(period: Period) -> u8 {
        1 << period as u8
    }

    pub fn contains(&self, period: Period) -> bool {
        self.mask & Self::bit(period) != 0
    }

    pub fn insert(&mut self, period: Period) {
        self.mask |= Self::bit(period);
    }

    pub fn remove(&mut self, period: Period) {
        self.mask &= !Self::bit(period);
    }

    /// Insert if absent, remove if present.
    pub fn toggle(&mut self, period: Period) {
        self.mask ^= Self::bit(period);
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Member periods in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Period> {
        let set = *self;
        Period::ALL.into_iter().filter(move |p| set.contains(*p))
    }

    /// Parse a comma-separated list of period names. Unrecognized names are
    /// ignored; an empty string is the empty set.
    pub fn parse_csv(value: &str) -> PeriodSet {
        let mut set = PeriodSet::EMPTY;
        for name in value.split(',') {
            if let Some(period) = Period::from_name(name) {
                set.insert(period);
            }
        }
        set
    }

    /// Comma-separated names in canonical order.
    pub fn to_csv(&self) -> String {
        let names: Vec<&str> = self.iter().map(Period::name).collect();
        names.join(",")
    }
}

impl FromIterator<Period> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        let mut set = PeriodSet::EMPTY;
        for period in iter {
            set.insert(period);
        }
        set
    }
}

impl fmt::Debug for PeriodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookbacks_match_graph_windows() {
        assert_eq!(Period::Day.lookback_secs(), 118_800);
        assert_eq!(Period::Week.lookback_secs(), 777_600);
        assert_eq!(Period::Month.lookback_secs(), 3_024_000);
        assert_eq!(Period::Quarter.lookback_secs(), 8_467_200);
        assert_eq!(Period::Year.lookback_secs(), 34_560_000);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for period in Period::ALL {
            assert_eq!(period.name().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!("fortnight".parse::<Period>().is_err());
        assert!("Day".parse::<Period>().is_err());
    }

    #[test]
    fn csv_parse_ignores_unknown_names() {
        let set = PeriodSet::parse_csv("day,fortnight,week");
        assert_eq!(set.to_csv(), "day,week");
    }

    #[test]
    fn empty_csv_is_the_empty_set() {
        let set = PeriodSet::parse_csv("");
        assert!(set.is_empty());
        assert_eq!(set.to_csv(), "");
    }

    #[test]
    fn iteration_is_canonical_regardless_of_insertion_order() {
        let mut set = PeriodSet::EMPTY;
        set.insert(Period::Year);
        set.insert(Period::Day);
        set.insert(Period::Month);
        assert_eq!(set.to_csv(), "day,month,year");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = PeriodSet::EMPTY;
        set.toggle(Period::Week);
        assert!(set.contains(Period::Week));
        set.toggle(Period::Week);
        assert!(!set.contains(Period::Week));
    }

    #[test]
    fn all_has_five_members() {
        assert_eq!(PeriodSet::all().len(), 5);
    }

    #[test]
    fn remove_leaves_other_members() {
        let mut set = PeriodSet::all();
        set.remove(Period::Quarter);
        assert_eq!(set.to_csv(), "day,week,month,year");
    }
}
