//! Terminal Colors
//!
//! ANSI color codes for terminal output. All color state is carried
//! explicitly through this struct; nothing writes escape codes from
//! global state.

use crate::db::heatmap::BUCKETS;

/// Color codes for terminal output
pub struct Colors {
    pub enabled: bool,
}

/// Heatmap palette, coldest to hottest. One entry per bucket.
const HEATMAP: [&str; BUCKETS] = [
    "\x1b[91m", // bright red
    "\x1b[93m", // bright yellow
    "\x1b[92m", // bright green
    "\x1b[94m", // bright blue
];

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Colors { enabled }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled { "\x1b[0m" } else { "" }
    }

    pub fn red(&self) -> &'static str {
        if self.enabled { "\x1b[31m" } else { "" }
    }

    pub fn yellow(&self) -> &'static str {
        if self.enabled { "\x1b[33m" } else { "" }
    }

    pub fn cyan(&self) -> &'static str {
        if self.enabled { "\x1b[36m" } else { "" }
    }

    pub fn bold(&self) -> &'static str {
        if self.enabled { "\x1b[1m" } else { "" }
    }

    /// Escape code for a heatmap bucket index. Indices past the palette
    /// clamp to the hottest entry.
    pub fn heat(&self, bucket: usize) -> &'static str {
        if !self.enabled {
            return "";
        }
        HEATMAP[bucket.min(BUCKETS - 1)]
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_emits_nothing() {
        let colors = Colors::new(false);
        assert_eq!(colors.reset(), "");
        assert_eq!(colors.cyan(), "");
        assert_eq!(colors.heat(0), "");
    }

    #[test]
    fn test_heat_clamps() {
        let colors = Colors::new(true);
        assert_eq!(colors.heat(3), colors.heat(99));
    }
}
