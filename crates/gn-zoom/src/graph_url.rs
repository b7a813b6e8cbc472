//! The graph image's source URL: recovering its time window and building
//! replacement requests.

use gn_core::numeric::lenient_i64;
use gn_core::query;
use gn_core::time::{parse_relative_time, truncate_to_minute};
use gn_core::Period;

/// A parsed graph source URL.
///
/// `start` and `end` are unix seconds. `rrd_options` keeps every rrdopts
/// token that is not a start/end flag, space-joined. `pass_through` keeps
/// every other query fragment verbatim, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphUrl {
    pub base: String,
    pub start: i64,
    pub end: i64,
    pub rrd_options: String,
    pub pass_through: Vec<String>,
}

impl GraphUrl {
    /// Parse a source URL at the given current time.
    ///
    /// The window starts as the day lookback ending at the truncated clock,
    /// then fragments apply strictly in order: when rrdopts start/end flags
    /// and `period`/`offset` fragments are both present, whichever came
    /// later wins. That order dependence is long-standing behavior; keep it.
    pub fn parse(url: &str, now: i64) -> GraphUrl {
        let (base, query_string) = match url.split_once('?') {
            Some((base, rest)) => (base, rest),
            None => (url, ""),
        };
        let end = truncate_to_minute(now);
        let mut graph = GraphUrl {
            base: base.to_string(),
            start: end - Period::Day.lookback_secs(),
            end,
            rrd_options: String::new(),
            pass_through: Vec::new(),
        };
        for fragment in query::fragments(query_string) {
            match fragment.key() {
                "rrdopts" => {
                    graph.apply_rrdopts(fragment.raw_value().unwrap_or(""), now);
                }
                "period" => {
                    if let Some(value) = fragment.value() {
                        if let Ok(period) = value.parse::<Period>() {
                            graph.start = graph.end - period.lookback_secs();
                        }
                    }
                }
                "offset" => {
                    if let Some(shift) = fragment.value().as_deref().and_then(lenient_i64) {
                        graph.start -= shift;
                        graph.end -= shift;
                    }
                }
                _ => graph.pass_through.push(fragment.raw().to_string()),
            }
        }
        graph
    }

    /// Scan one rrdopts value: `-s`/`--start` and `-e`/`--end` set the
    /// window (value as the next token or appended to the flag), everything
    /// else is kept. A flag whose value cannot be understood leaves the
    /// prior window edge in place.
    fn apply_rrdopts(&mut self, raw_value: &str, now: i64) {
        let decoded = query::decode_plus(raw_value);
        let mut kept: Vec<&str> = Vec::new();
        let mut tokens = decoded.split_whitespace();
        while let Some(token) = tokens.next() {
            if let Some(value) = flag_value(token, "-s", "--start", &mut tokens) {
                if let Some(start) = parse_relative_time(&value, now) {
                    self.start = start;
                }
            } else if let Some(value) = flag_value(token, "-e", "--end", &mut tokens) {
                if let Some(end) = parse_relative_time(&value, now) {
                    self.end = end;
                }
            } else {
                kept.push(token);
            }
        }
        let kept = kept.join(" ");
        if self.rrd_options.is_empty() {
            self.rrd_options = kept;
        } else if !kept.is_empty() {
            self.rrd_options.push(' ');
            self.rrd_options.push_str(&kept);
        }
    }

    /// Request URL for a replacement image covering `start..end`.
    ///
    /// The layout is fixed: pass-through fragments first (the separator is
    /// emitted even when there are none), then a single rrdopts value with
    /// the surviving options and the new window appended.
    pub fn zoom_request_url(&self, start: i64, end: i64) -> String {
        let options = format!("{} -s {} -e {}", self.rrd_options, start, end);
        format!(
            "{}?{}&rrdopts={}",
            self.base,
            self.pass_through.join("&"),
            query::encode_spaces_as_plus(&options)
        )
    }

    /// Seconds covered by the window.
    pub fn span_secs(&self) -> i64 {
        self.end - self.start
    }
}

/// Match one flag in either spelling. The exact token takes the next token
/// as its value (empty if the options end there); any longer token starting
/// with the flag is the appended form. `None` means not this flag.
fn flag_value(
    token: &str,
    short: &str,
    long: &str,
    rest: &mut std::str::SplitWhitespace<'_>,
) -> Option<String> {
    for flag in [long, short] {
        if token == flag {
            return Some(rest.next().unwrap_or("").to_string());
        }
        if let Some(appended) = token.strip_prefix(flag) {
            if !appended.is_empty() {
                return Some(appended.to_string());
            }
        }
    }
    None
}
