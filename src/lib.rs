//! Safe bindings to the Oniguruma regular expression engine, focused on
//! named capture groups.
//!
//! Oniguruma allows the same group name to be declared more than once in a
//! pattern (across alternation branches or repeated constructs). This crate
//! compiles a pattern once, caches its group-name resolution, and applies a
//! single documented tie-break policy when a name is bound to several group
//! indices. The native compiled program and the per-match region are owned
//! values, so they are released exactly once and can never be read after
//! release.
//!
//! # Examples
//!
//! ```
//! use onig_captures::prelude::*;
//!
//! # fn main() -> onig_captures::Result<()> {
//! let re = Regex::new("(?<foo>a*)(?<bar>b*)(?<foo>c*)")?;
//!
//! let result = re.search("aaabbbbcc")?;
//! assert!(result.is_match());
//! assert_eq!(result.get("foo")?, "aaa");
//! assert_eq!(result.get("bar")?, "bbbb");
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs, rust_2018_compatibility, rust_2018_idioms)]
#![cfg_attr(test, deny(warnings))]

mod ffi {
    pub use onig_sys::*;
}

mod compile;
mod error;
mod runtime;

pub use crate::compile::{Options, Regex};
pub use crate::error::{Error, Result};
pub use crate::runtime::{EmptyCapture, MatchResult, Region, RegionRef};

/// The `onig-captures` Prelude
pub mod prelude {
    pub use crate::{EmptyCapture, MatchResult, Options, Regex};
}

use std::ffi::CStr;

/// Utility function for identifying the underlying engine release.
///
/// Returns a string containing the version number of the Oniguruma library
/// this crate was linked against.
pub fn version() -> &'static CStr {
    unsafe { CStr::from_ptr(ffi::onig_version()) }
}
