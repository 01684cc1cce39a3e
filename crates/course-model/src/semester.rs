//! Semester rank: a sortable integer for "Season YYYY" tokens.

use std::sync::LazyLock;

use regex::Regex;

static SEMESTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s+([0-9]{4})$").expect("valid semester pattern")
});

/// Academic season, in calendar order within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Winter = 1,
    Spring = 2,
    Summer = 3,
    Fall = 4,
}

impl Season {
    /// Exact, case-sensitive season name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Winter" => Some(Season::Winter),
            "Spring" => Some(Season::Spring),
            "Summer" => Some(Season::Summer),
            "Fall" => Some(Season::Fall),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Rank a posted-time token as `year * 10 + season`.
///
/// The token is trimmed and must be exactly `<Season> <4-digit year>`.
/// Anything else ranks as unknown (`None`).
pub fn semester_rank(value: &str) -> Option<u32> {
    let captures = SEMESTER_PATTERN.captures(value.trim())?;
    let season = Season::from_name(captures.get(1)?.as_str())?;
    let year: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(year * 10 + season.index())
}
