use std::fmt;
use std::str::FromStr;

use log::debug;

/// Shallowest heading level
pub const MIN_HEADING_LEVEL: usize = 1;
/// Deepest heading level
pub const MAX_HEADING_LEVEL: usize = 6;

/// Closed range of heading levels that go into the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: usize,
    pub max: usize,
}

impl Default for LevelRange {
    fn default() -> Self {
        Self {
            min: MIN_HEADING_LEVEL,
            max: MAX_HEADING_LEVEL,
        }
    }
}

impl LevelRange {
    /// Parse a `"min-max"` range string.
    ///
    /// Never fails. Input that is not two dash-separated parts gives the full
    /// range. A low bound above 6 becomes 1; a high bound above 6, or equal
    /// to 1, becomes 6. A bound that does not parse keeps its default. If the
    /// result is empty or a single level, the full range is used instead.
    pub fn parse(range_str: &str) -> Self {
        let mut range = Self::default();

        let parts: Vec<&str> = range_str.split('-').collect();
        if parts.len() != 2 {
            debug!("Level range '{}' is not of the form min-max, using {}", range_str, range);
            return range;
        }

        if let Ok(low) = parts[0].parse::<usize>() {
            range.min = if low > MAX_HEADING_LEVEL { MIN_HEADING_LEVEL } else { low };
        }

        if let Ok(high) = parts[1].parse::<usize>() {
            range.max = if high > MAX_HEADING_LEVEL || high == MIN_HEADING_LEVEL {
                MAX_HEADING_LEVEL
            } else {
                high
            };
        }

        if range.min >= range.max {
            debug!("Level range '{}' collapsed to {}, using full range", range_str, range);
            return Self::default();
        }

        range
    }

    /// Whether a heading level falls inside the range
    pub fn contains(&self, level: usize) -> bool {
        level >= self.min && level <= self.max
    }

    /// Indentation depth of a heading in the TOC
    pub fn depth(&self, level: usize) -> usize {
        level.saturating_sub(self.min)
    }
}

impl FromStr for LevelRange {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for LevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: usize, max: usize) -> LevelRange {
        LevelRange { min, max }
    }

    #[test]
    fn test_parse_valid_ranges() {
        assert_eq!(LevelRange::parse("1-6"), range(1, 6));
        assert_eq!(LevelRange::parse("2-4"), range(2, 4));
        assert_eq!(LevelRange::parse("+2-3"), range(2, 3));
    }

    #[test]
    fn test_parse_bound_corrections() {
        // low bound above 6 drops to 1
        assert_eq!(LevelRange::parse("9-4"), range(1, 4));
        // high bound above 6, or exactly 1, rises to 6
        assert_eq!(LevelRange::parse("2-9"), range(2, 6));
        assert_eq!(LevelRange::parse("0-1"), range(0, 6));
        // zero is accepted as a low bound
        assert_eq!(LevelRange::parse("0-3"), range(0, 3));
    }

    #[test]
    fn test_parse_collapsed_ranges_reset() {
        assert_eq!(LevelRange::parse("3-2"), LevelRange::default());
        assert_eq!(LevelRange::parse("4-4"), LevelRange::default());
        assert_eq!(LevelRange::parse("1-1"), LevelRange::default());
        assert_eq!(LevelRange::parse("6-9"), LevelRange::default());
    }

    #[test]
    fn test_parse_malformed_ranges() {
        assert_eq!(LevelRange::parse(""), LevelRange::default());
        assert_eq!(LevelRange::parse("3"), LevelRange::default());
        assert_eq!(LevelRange::parse("1-2-3"), LevelRange::default());
        // unparsable parts keep their defaults
        assert_eq!(LevelRange::parse("x-4"), range(1, 4));
        assert_eq!(LevelRange::parse("3-y"), range(3, 6));
        assert_eq!(LevelRange::parse("-4"), range(1, 4));
        assert_eq!(LevelRange::parse(" 2-4"), range(1, 4));
    }

    #[test]
    fn test_contains_and_depth() {
        let levels = range(2, 4);
        assert!(!levels.contains(1));
        assert!(levels.contains(2));
        assert!(levels.contains(4));
        assert!(!levels.contains(5));
        assert_eq!(levels.depth(2), 0);
        assert_eq!(levels.depth(4), 2);
        assert_eq!(range(0, 3).depth(1), 1);
    }

    #[test]
    fn test_display_and_from_str() {
        let levels: LevelRange = "2-5".parse().unwrap();
        assert_eq!(levels.to_string(), "2-5");
    }
}
