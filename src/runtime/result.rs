use std::fmt;

use crate::{
    error::{Error, Result},
    ffi,
    runtime::{Region, RegionRef},
    Regex,
};

/// Policy for resolving a name bound to several group indices when a
/// candidate group participated in the match but captured an empty span.
///
/// The two behaviors exist because real call sites disagree: input
/// validators want the first participating branch even when it is empty,
/// extraction code wants the first branch that actually captured text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyCapture {
    /// Treat an empty capture as "no real value" and fall through to the
    /// next group index declared under the same name. This is the default.
    Skip,
    /// The first participating group index wins, even when its capture is
    /// empty.
    Keep,
}

impl Default for EmptyCapture {
    fn default() -> Self {
        EmptyCapture::Skip
    }
}

/// The outcome of a single match or search call.
///
/// Owns the engine's per-match region and borrows both the pattern (`'r`,
/// for group name resolution) and the searched text (`'t`), so the pattern
/// cannot be freed and the text cannot move while captures may still be
/// read. Dropping the result frees the region exactly once.
pub struct MatchResult<'r, 't> {
    regex: &'r Regex,
    input: &'t str,
    region: Option<Region>,
}

impl fmt::Debug for MatchResult<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("expression", &self.regex.expression())
            .field("input", &self.input)
            .field("matched", &self.is_match())
            .finish()
    }
}

impl<'r, 't> MatchResult<'r, 't> {
    pub(crate) fn new(regex: &'r Regex, input: &'t str, region: Option<Region>) -> Self {
        MatchResult { regex, input, region }
    }

    /// True iff the pattern matched.
    pub fn is_match(&self) -> bool {
        self.region.is_some()
    }

    /// The exact text this result was produced from.
    pub fn input(&self) -> &'t str {
        self.input
    }

    /// The engine region, or `None` on a mismatch or after
    /// [`release`](MatchResult::release).
    pub fn region(&self) -> Option<&RegionRef> {
        self.region.as_deref()
    }

    /// Extract the capture for `name` under the default
    /// [`EmptyCapture::Skip`] policy.
    pub fn get(&self, name: &str) -> Result<&'t str> {
        self.get_with(name, EmptyCapture::default())
    }

    /// Extract the capture for `name` under an explicit empty-capture
    /// policy.
    ///
    /// A mismatch yields `Ok("")`; not matching is not a lookup failure.
    /// A name never declared in the pattern yields
    /// [`Error::UnknownGroupName`]. For a name declared more than once the
    /// group indices are tried in ascending order: groups that did not
    /// participate in the match are skipped, an empty capture is resolved
    /// per `empty`, and the first non-empty capture is returned without
    /// looking further. When every index is skipped the capture is the
    /// empty string.
    pub fn get_with(&self, name: &str, empty: EmptyCapture) -> Result<&'t str> {
        let region = match self.region.as_deref() {
            Some(region) => region,
            None => return Ok(""),
        };

        for group in self.regex.group_indices(name)? {
            let (beg, end) = match region.offsets(group as usize) {
                Some(offsets) => offsets,
                None => continue,
            };

            if beg == ffi::ONIG_REGION_NOTPOS && end == ffi::ONIG_REGION_NOTPOS {
                continue;
            }

            if beg < 0 || end < beg || end as usize > self.input.len() {
                return Err(Error::CorruptRegion {
                    group,
                    begin: beg.into(),
                    end: end.into(),
                });
            }

            if beg == end {
                match empty {
                    EmptyCapture::Skip => continue,
                    EmptyCapture::Keep => return Ok(""),
                }
            }

            // The slice is byte-exact; a span off a char boundary means the
            // engine and this result disagree about input identity.
            return self
                .input
                .get(beg as usize..end as usize)
                .ok_or(Error::CorruptRegion {
                    group,
                    begin: beg.into(),
                    end: end.into(),
                });
        }

        Ok("")
    }

    /// Release the native region early.
    ///
    /// Afterwards the result degrades to a mismatch: `is_match` is false
    /// and `get` returns empty captures; nothing can read freed memory.
    /// Dropping the result without calling `release` frees the region just
    /// the same.
    pub fn release(&mut self) {
        self.region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_PATTERN: &str = "^1st user (?<user>[a-z]*) ?2nd user (?<user>[a-z]+) value (?<val>[0-9]+)$";

    #[test]
    fn test_named_group_roundtrip() {
        let re = Regex::must_compile(USER_PATTERN);
        let result = re.match_at("1st user foo 2nd user bar value 7", 0).unwrap();

        assert!(result.is_match());
        assert_eq!(result.get("user").unwrap(), "foo");
        assert_eq!(result.get("val").unwrap(), "7");
    }

    #[test]
    fn test_duplicate_name_first_nonempty_wins() {
        let re = Regex::must_compile("(?<foo>a*)(?<bar>b*)(?<foo>c*)");
        let result = re.search("aaabbbbcc").unwrap();

        assert_eq!(result.get("foo").unwrap(), "aaa");
        assert_eq!(result.get("bar").unwrap(), "bbbb");
    }

    #[test]
    fn test_empty_capture_skips_to_next_alternative() {
        // The first `user` group captures an empty span; the default policy
        // falls through to the second one.
        let re = Regex::must_compile(USER_PATTERN);
        let result = re.match_at("1st user 2nd user bar value 789", 0).unwrap();

        assert!(result.is_match());
        assert_eq!(result.get("user").unwrap(), "bar");
        assert_eq!(result.get("val").unwrap(), "789");
    }

    #[test]
    fn test_empty_capture_kept_when_first_resolved_wins() {
        // Same scenario under the other policy: the empty first capture is
        // the answer.
        let re = Regex::must_compile(USER_PATTERN);
        let result = re.match_at("1st user 2nd user bar value 789", 0).unwrap();

        assert_eq!(result.get_with("user", EmptyCapture::Keep).unwrap(), "");
        assert_eq!(result.get_with("val", EmptyCapture::Keep).unwrap(), "789");
    }

    #[test]
    fn test_both_named_groups_captured() {
        let re = Regex::must_compile(USER_PATTERN);
        let result = re
            .match_at("1st user somebody 2nd user else value 123", 0)
            .unwrap();

        assert_eq!(result.get("user").unwrap(), "somebody");
        assert_eq!(result.get("val").unwrap(), "123");
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let re =
            Regex::must_compile("^1st user (?<user>[a-z]*) ?2nd user (?<user>[a-z]+) (?<x>.*)(.*)value (?<val>[0-9]*)$");
        let result = re.match_at("1st user foo 2nd user bar value 789", 0).unwrap();

        assert!(result.is_match());

        for name in &["void", ""] {
            assert_eq!(
                result.get(name).unwrap_err(),
                Error::UnknownGroupName((*name).into())
            );
        }

        // A declared group that captured nothing is empty, not an error.
        assert_eq!(result.get("x").unwrap(), "");
    }

    #[test]
    fn test_mismatch_is_empty_not_error() {
        let re = Regex::must_compile("^abc(?<g>.)$");
        let result = re.match_at("xyz", 0).unwrap();

        assert!(!result.is_match());
        assert_eq!(result.get("g").unwrap(), "");
    }

    #[test]
    fn test_nonparticipating_alternative_is_skipped() {
        let re = Regex::must_compile("(?<v>a)|(?<v>b)");
        let result = re.search("b").unwrap();

        assert_eq!(result.get("v").unwrap(), "b");
        assert_eq!(result.region().unwrap().span(1), None);
        assert_eq!(result.region().unwrap().span(2), Some(0..1));
    }

    #[test]
    fn test_get_after_release_degrades_to_no_match() {
        let re = Regex::must_compile("(?<foo>a+)");
        let mut result = re.search("aaa").unwrap();

        assert_eq!(result.get("foo").unwrap(), "aaa");

        result.release();

        assert!(!result.is_match());
        assert_eq!(result.get("foo").unwrap(), "");
        assert!(result.region().is_none());
    }

    #[test]
    fn test_multibyte_capture() {
        let re = Regex::must_compile("value (?<val>.+)");
        let result = re.search("value naïve").unwrap();

        assert_eq!(result.get("val").unwrap(), "naïve");
    }
}
