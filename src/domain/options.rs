//! Tunable policies of the normalization pipeline.
//!
//! Historical variants of the slug and cleaning rules disagreed on a few
//! details. Each disagreement is a policy here instead of a separate copy of
//! the code.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// What happens to apostrophes when building a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApostrophePolicy {
    /// Treated like any other punctuation: `can't` becomes `can-t`.
    #[default]
    Space,
    /// Removed without a separator: `can't` becomes `cant`.
    Strip,
}

/// Initial value of the per-slug duplicate counter.
///
/// With `Zero` the second occurrence of a slug gets `-atwgp1`; with `One` it
/// gets `-atwgp2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixStart {
    #[default]
    Zero,
    One,
}

impl SuffixStart {
    pub fn initial_count(self) -> usize {
        match self {
            SuffixStart::Zero => 0,
            SuffixStart::One => 1,
        }
    }
}

/// Options shared by every pipeline operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizerOptions {
    pub apostrophes: ApostrophePolicy,
    pub suffix_start: SuffixStart,
    pub keyword_substitutions: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            apostrophes: ApostrophePolicy::default(),
            suffix_start: SuffixStart::default(),
            keyword_substitutions: true,
        }
    }
}

/// Error returned when parsing a policy name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParsePolicyError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for ApostrophePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "space" => Ok(ApostrophePolicy::Space),
            "strip" => Ok(ApostrophePolicy::Strip),
            _ => Err(ParsePolicyError {
                kind: "apostrophe policy",
                value: s.to_string(),
                expected: "space, strip",
            }),
        }
    }
}

impl FromStr for SuffixStart {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(SuffixStart::Zero),
            "one" | "1" => Ok(SuffixStart::One),
            _ => Err(ParsePolicyError {
                kind: "suffix start",
                value: s.to_string(),
                expected: "zero, one",
            }),
        }
    }
}

impl fmt::Display for ApostrophePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApostrophePolicy::Space => f.write_str("space"),
            ApostrophePolicy::Strip => f.write_str("strip"),
        }
    }
}

impl fmt::Display for SuffixStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixStart::Zero => f.write_str("zero"),
            SuffixStart::One => f.write_str("one"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizerOptions::default();
        assert_eq!(options.apostrophes, ApostrophePolicy::Space);
        assert_eq!(options.suffix_start, SuffixStart::Zero);
        assert!(options.keyword_substitutions);
    }

    #[test]
    fn test_parse_apostrophe_policy() {
        assert_eq!("space".parse::<ApostrophePolicy>(), Ok(ApostrophePolicy::Space));
        assert_eq!(" STRIP ".parse::<ApostrophePolicy>(), Ok(ApostrophePolicy::Strip));
        assert!("remove".parse::<ApostrophePolicy>().is_err());
    }

    #[test]
    fn test_parse_suffix_start() {
        assert_eq!("zero".parse::<SuffixStart>(), Ok(SuffixStart::Zero));
        assert_eq!("1".parse::<SuffixStart>(), Ok(SuffixStart::One));

        let err = "two".parse::<SuffixStart>().unwrap_err();
        assert!(err.to_string().contains("zero, one"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for policy in [ApostrophePolicy::Space, ApostrophePolicy::Strip] {
            assert_eq!(policy.to_string().parse::<ApostrophePolicy>(), Ok(policy));
        }
        for start in [SuffixStart::Zero, SuffixStart::One] {
            assert_eq!(start.to_string().parse::<SuffixStart>(), Ok(start));
        }
    }

    #[test]
    fn test_initial_count() {
        assert_eq!(SuffixStart::Zero.initial_count(), 0);
        assert_eq!(SuffixStart::One.initial_count(), 1);
    }
}
