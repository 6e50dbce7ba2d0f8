use foreign_types::ForeignType;
use libc::c_int;

use crate::{
    error::{error_message, Error, Result},
    ffi,
    runtime::{MatchResult, Region},
    Regex,
};

impl Regex {
    /// Attempt the pattern anchored at byte offset `at` of `input`.
    ///
    /// The match must start exactly at `at` but may end anywhere, so this
    /// validates an input-prefix contract rather than finding an
    /// occurrence; use [`Regex::search`] for the latter. `at` must be a
    /// char boundary of `input` ([`Error::BadOffset`] otherwise). A
    /// mismatch is a successful call with `is_match() == false`; only an
    /// engine execution failure is an `Err`.
    pub fn match_at<'r, 't>(&'r self, input: &'t str, at: usize) -> Result<MatchResult<'r, 't>> {
        if !input.is_char_boundary(at) {
            return Err(Error::BadOffset {
                offset: at,
                len: input.len(),
            });
        }

        let bytes = input.as_bytes();
        let region = Region::alloc()?;

        let ret = unsafe {
            let begin = bytes.as_ptr();
            let end = begin.add(bytes.len());

            ffi::onig_match(
                self.program.as_ptr(),
                begin,
                end,
                begin.add(at),
                region.as_ptr(),
                ffi::ONIG_OPTION_NONE,
            )
        };

        self.wrap(input, region, ret)
    }

    /// Scan `input` for the first position where the pattern matches.
    pub fn search<'r, 't>(&'r self, input: &'t str) -> Result<MatchResult<'r, 't>> {
        self.search_at(input, 0)
    }

    /// Scan for the first match at or after byte offset `from`.
    ///
    /// Same result semantics as [`Regex::match_at`]; only the
    /// starting-position policy differs.
    pub fn search_at<'r, 't>(&'r self, input: &'t str, from: usize) -> Result<MatchResult<'r, 't>> {
        if !input.is_char_boundary(from) {
            return Err(Error::BadOffset {
                offset: from,
                len: input.len(),
            });
        }

        let bytes = input.as_bytes();
        let region = Region::alloc()?;

        let ret = unsafe {
            let begin = bytes.as_ptr();
            let end = begin.add(bytes.len());

            ffi::onig_search(
                self.program.as_ptr(),
                begin,
                end,
                begin.add(from),
                end,
                region.as_ptr(),
                ffi::ONIG_OPTION_NONE,
            )
        };

        self.wrap(input, region, ret)
    }

    /// True iff the pattern matches `input` anchored at its start.
    pub fn is_match(&self, input: &str) -> Result<bool> {
        self.match_at(input, 0).map(|result| result.is_match())
    }

    // Region ownership moves into the result on match and is dropped (and
    // freed) right here on mismatch and on error.
    fn wrap<'r, 't>(&'r self, input: &'t str, region: Region, ret: c_int) -> Result<MatchResult<'r, 't>> {
        if ret >= 0 {
            Ok(MatchResult::new(self, input, Some(region)))
        } else if ret == ffi::ONIG_MISMATCH {
            Ok(MatchResult::new(self, input, None))
        } else {
            Err(Error::Engine(error_message(ret)))
        }
    }
}
