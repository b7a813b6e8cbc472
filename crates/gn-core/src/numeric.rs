//! Lenient numeric parsing for query-string values.
//!
//! Query values are user-editable, so they parse the way a browser address
//! bar is forgiving: a leading sign and digits count, trailing junk is
//! ignored, and a value with no leading digits is simply absent.

/// Parse the leading integer of `value`, if any.
pub fn lenient_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1_i64, rest),
        None => (1_i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
