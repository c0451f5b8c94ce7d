//! `HH:MM` clock times.

use std::sync::LazyLock;

use regex::Regex;

/// 24-hour `HH:MM`, two digits each.
pub const CLOCK_TIME_PATTERN: &str = r"^([01][0-9]|2[0-3]):([0-5][0-9])$";

static CLOCK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLOCK_TIME_PATTERN).expect("valid regex"));

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_clock_time(value: &str) -> Option<u16> {
    let caps = CLOCK_TIME_RE.captures(value)?;
    let hours: u16 = caps[1].parse().ok()?;
    let minutes: u16 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}
