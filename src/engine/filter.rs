//! Pre-pass record filters.

use crate::rules::patterns;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Record filters applied before renaming (and, for
    /// `DROP_OVERLOADED`, after numbering).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Filters: u8 {
        /// Drop subscription-info pseudo nodes (quota, expiry, contact).
        const CLEAR_INFO          = 0b0000_0001;
        /// Drop anything carrying a rate other than 1×.
        const DROP_HIGH_RATE      = 0b0000_0010;
        /// Keep only explicitly high-rate nodes.
        const KEEP_HIGH_RATE_ONLY = 0b0000_0100;
        /// Keep only whitelisted regions with a whitelisted digit.
        const WHITELIST           = 0b0000_1000;
        /// Drop overloaded or legacy nodes once numbering is done.
        const DROP_OVERLOADED     = 0b0001_0000;
    }
}

impl Default for Filters {
    fn default() -> Self {
        Filters::CLEAR_INFO
    }
}

/// Why a record was filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InfoNoise,
    HighRate,
    NotHighRate,
    NotWhitelisted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::InfoNoise => "info noise",
            Rejection::HighRate => "high rate",
            Rejection::NotHighRate => "not high rate",
            Rejection::NotWhitelisted => "not whitelisted",
        })
    }
}

impl Filters {
    /// First pre-pass filter that rejects `name`, if any.
    pub fn rejection(self, name: &str) -> Option<Rejection> {
        if self.contains(Filters::CLEAR_INFO) && patterns::info_noise().is_match(name) {
            return Some(Rejection::InfoNoise);
        }
        if self.contains(Filters::DROP_HIGH_RATE) && patterns::high_rate().is_match(name) {
            return Some(Rejection::HighRate);
        }
        if self.contains(Filters::KEEP_HIGH_RATE_ONLY) && !patterns::high_rate_strict().is_match(name) {
            return Some(Rejection::NotHighRate);
        }
        if self.contains(Filters::WHITELIST)
            && !(patterns::whitelist_regions().is_match(name) && patterns::whitelist_digits().is_match(name))
        {
            return Some(Rejection::NotWhitelisted);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_only_clears_info() {
        let filters = Filters::default();
        assert_eq!(filters.rejection("剩余流量：100GB"), Some(Rejection::InfoNoise));
        assert_eq!(filters.rejection("到期时间：2026-01-01"), Some(Rejection::InfoNoise));
        assert_eq!(filters.rejection("香港 2x"), None);
        assert_eq!(Filters::empty().rejection("剩余流量：100GB"), None);
    }

    #[test]
    fn rate_filters() {
        let cases = vec![
            (Filters::DROP_HIGH_RATE, "香港 2x", Some(Rejection::HighRate)),
            (Filters::DROP_HIGH_RATE, "香港 0.5倍", Some(Rejection::HighRate)),
            (Filters::DROP_HIGH_RATE, "香港 1x", None),
            (Filters::DROP_HIGH_RATE, "香港 01", None),
            (Filters::KEEP_HIGH_RATE_ONLY, "香港 2x", None),
            (Filters::KEEP_HIGH_RATE_ONLY, "香港 高倍", None),
            (Filters::KEEP_HIGH_RATE_ONLY, "香港 0.5x", Some(Rejection::NotHighRate)),
            (Filters::KEEP_HIGH_RATE_ONLY, "香港 01", Some(Rejection::NotHighRate)),
        ];
        for (filters, name, expected) in cases {
            assert_eq!(filters.rejection(name), expected, "{filters:?} on {name:?}");
        }
    }

    #[test]
    fn whitelist_needs_region_and_digit() {
        let filters = Filters::WHITELIST;
        assert_eq!(filters.rejection("HK 02"), None);
        assert_eq!(filters.rejection("日本 04"), None);
        assert_eq!(filters.rejection("HK 01"), Some(Rejection::NotWhitelisted));
        assert_eq!(filters.rejection("德国 02"), Some(Rejection::NotWhitelisted));
    }

    #[test]
    fn info_noise_takes_precedence() {
        let filters = Filters::CLEAR_INFO | Filters::WHITELIST;
        assert_eq!(filters.rejection("HK 测试 02"), Some(Rejection::InfoNoise));
    }
}
