use std::result::Result as StdResult;

use libc::c_int;
use thiserror::Error;

use crate::ffi;

/// The type returned by onig-captures methods.
pub type Result<T> = StdResult<T, Error>;

/// Oniguruma wrapper error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The pattern was rejected by the engine compiler.
    #[error("pattern compilation failed: {0}")]
    Compile(String),

    /// The queried capture group name is not declared in the pattern.
    #[error("{0}: no such capture group in pattern")]
    UnknownGroupName(String),

    /// The engine itself failed while executing a match (not a mismatch).
    #[error("regex engine failed: {0}")]
    Engine(String),

    /// The engine reported a capture span that does not lie inside the
    /// searched input. Indicates a wrapper bug, not a user error.
    #[error("group {group}: capture span {begin}..{end} lies outside the searched input")]
    CorruptRegion {
        /// The capture group index whose span is inconsistent.
        group: u32,
        /// Reported begin offset.
        begin: i64,
        /// Reported end offset.
        end: i64,
    },

    /// A match/search start offset is out of bounds or splits a character.
    #[error("offset {offset} is not a char boundary of the {len} byte input")]
    BadOffset {
        /// The requested start offset.
        offset: usize,
        /// Length of the searched input in bytes.
        len: usize,
    },

    /// Invalid short flag passed to [`Options`](crate::Options) parsing.
    #[error("invalid option flag: {0}")]
    InvalidOptionFlag(char),
}

/// Translate an engine return code into human text.
pub(crate) fn error_message(code: c_int) -> String {
    let mut buf = [0u8; ffi::ONIG_MAX_ERROR_MESSAGE_LEN as usize];
    let len = unsafe { ffi::onig_error_code_to_str(buf.as_mut_ptr(), code) };

    message_from(&buf, len)
}

/// Translate a compile return code, using the structured error info the
/// engine filled in during `onig_new`.
pub(crate) fn compile_error_message(code: c_int, info: *const ffi::OnigErrorInfo) -> String {
    let mut buf = [0u8; ffi::ONIG_MAX_ERROR_MESSAGE_LEN as usize];
    let len = unsafe { ffi::onig_error_code_to_str(buf.as_mut_ptr(), code, info) };

    message_from(&buf, len)
}

fn message_from(buf: &[u8], len: c_int) -> String {
    if len <= 0 {
        "unknown error".into()
    } else {
        String::from_utf8_lossy(&buf[..len as usize]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let msg = error_message(ffi::ONIG_MISMATCH);

        assert!(!msg.is_empty());
        assert_ne!(msg, "unknown error");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::UnknownGroupName("user".into()).to_string(),
            "user: no such capture group in pattern"
        );
        assert_eq!(
            Error::BadOffset { offset: 9, len: 3 }.to_string(),
            "offset 9 is not a char boundary of the 3 byte input"
        );
    }
}
