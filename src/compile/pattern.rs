use std::fmt;
use std::mem::MaybeUninit;
use std::ptr::{self, addr_of_mut};
use std::str::FromStr;

use foreign_types::{foreign_type, ForeignType};
use libc::c_int;

use crate::{
    compile::names::NameCache,
    error::{compile_error_message, Error, Result},
    ffi, Options,
};

foreign_type! {
    /// Owned handle to an expression compiled by the engine.
    pub unsafe type Program: Send + Sync {
        type CType = ffi::OnigRegexType;

        fn drop = free_program;
    }
}

unsafe fn free_program(re: *mut ffi::OnigRegexType) {
    ffi::onig_free(re);
}

/// A compiled regular expression with cached capture group name resolution.
///
/// The compiled program is owned by this value and freed exactly once when
/// it is dropped. Matching does not mutate the program, so a shared `Regex`
/// may be used from several threads at once; the group name cache is the
/// only interior mutability and is guarded by a lock.
pub struct Regex {
    pub(crate) program: Program,
    pub(crate) expression: String,
    pub(crate) options: Options,
    pub(crate) names: NameCache,
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("expression", &self.expression)
            .field("options", &self.options)
            .finish()
    }
}

impl FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    fn from_str(s: &str) -> Result<Regex> {
        Regex::new(s)
    }
}

impl Regex {
    /// Compiles a regular expression with default options.
    ///
    /// Patterns use Oniguruma's Ruby syntax over UTF-8 input, which allows
    /// the same `(?<name>...)` group name to be declared more than once.
    /// If an invalid expression is given, then an error is returned.
    pub fn new(pattern: &str) -> Result<Regex> {
        Self::with_options(pattern, Options::default())
    }

    /// Compiles a regular expression with the given [`Options`].
    pub fn with_options(pattern: &str, options: Options) -> Result<Regex> {
        let bytes = pattern.as_bytes();
        let mut raw: ffi::OnigRegex = ptr::null_mut();
        let mut err_info = MaybeUninit::<ffi::OnigErrorInfo>::zeroed();

        let ret = unsafe {
            ffi::onig_new(
                &mut raw,
                bytes.as_ptr(),
                bytes.as_ptr().add(bytes.len()),
                options.bits(),
                addr_of_mut!(ffi::OnigEncodingUTF8),
                addr_of_mut!(ffi::OnigSyntaxRuby),
                err_info.as_mut_ptr(),
            )
        };

        if ret != ffi::ONIG_NORMAL as c_int {
            return Err(Error::Compile(compile_error_message(ret, err_info.as_ptr())));
        }

        Ok(Regex {
            program: unsafe { Program::from_ptr(raw) },
            expression: pattern.to_owned(),
            options,
            names: NameCache::default(),
        })
    }

    /// Compiles a regular expression, panicking on failure.
    ///
    /// Intended for call sites that treat the pattern as a build-time
    /// constant; everything else should use [`Regex::new`] and handle the
    /// error.
    pub fn must_compile(pattern: &str) -> Regex {
        Self::new(pattern).unwrap_or_else(|err| panic!("compile {:?}: {}", pattern, err))
    }

    /// The original pattern text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The options the pattern was compiled with.
    pub fn options(&self) -> Options {
        self.options
    }
}
