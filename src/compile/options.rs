use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

use crate::{error::Error, ffi};

bitflags! {
    /// Options which modify the behaviour of a compiled expression.
    pub struct Options: ffi::OnigOptionType {
        /// Ambiguity of case is ignored.
        const IGNORECASE = ffi::ONIG_OPTION_IGNORECASE;
        /// Extended pattern form: whitespace and `#` comments are ignored.
        const EXTEND = ffi::ONIG_OPTION_EXTEND;
        /// `.` matches a newline.
        const MULTILINE = ffi::ONIG_OPTION_MULTILINE;
        /// `^` and `$` only match at the start and end of the input.
        const SINGLELINE = ffi::ONIG_OPTION_SINGLELINE;
        /// Find the longest match rather than the first.
        const FIND_LONGEST = ffi::ONIG_OPTION_FIND_LONGEST;
        /// Ignore empty matches.
        const FIND_NOT_EMPTY = ffi::ONIG_OPTION_FIND_NOT_EMPTY;
        /// Plain `(...)` groups do not capture.
        const DONT_CAPTURE_GROUP = ffi::ONIG_OPTION_DONT_CAPTURE_GROUP;
        /// Named and plain groups all capture.
        const CAPTURE_GROUP = ffi::ONIG_OPTION_CAPTURE_GROUP;
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::empty()
    }
}

impl FromStr for Options {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Options::empty();

        for c in s.chars() {
            match c {
                'i' => options |= Options::IGNORECASE,
                'x' => options |= Options::EXTEND,
                'm' => options |= Options::MULTILINE,
                's' => options |= Options::SINGLELINE,
                'l' => options |= Options::FIND_LONGEST,
                'e' => options |= Options::FIND_NOT_EMPTY,
                'G' => options |= Options::DONT_CAPTURE_GROUP,
                'g' => options |= Options::CAPTURE_GROUP,
                _ => {
                    return Err(Error::InvalidOptionFlag(c));
                }
            }
        }

        Ok(options)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Options::IGNORECASE) {
            write!(f, "i")?
        }
        if self.contains(Options::EXTEND) {
            write!(f, "x")?
        }
        if self.contains(Options::MULTILINE) {
            write!(f, "m")?
        }
        if self.contains(Options::SINGLELINE) {
            write!(f, "s")?
        }
        if self.contains(Options::FIND_LONGEST) {
            write!(f, "l")?
        }
        if self.contains(Options::FIND_NOT_EMPTY) {
            write!(f, "e")?
        }
        if self.contains(Options::DONT_CAPTURE_GROUP) {
            write!(f, "G")?
        }
        if self.contains(Options::CAPTURE_GROUP) {
            write!(f, "g")?
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_roundtrip() {
        let options: Options = "im".parse().unwrap();

        assert_eq!(options, Options::IGNORECASE | Options::MULTILINE);
        assert_eq!(options.to_string(), "im");
    }

    #[test]
    fn test_all_flags_roundtrip() {
        let options = Options::all();
        let parsed: Options = options.to_string().parse().unwrap();

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_invalid_flag() {
        assert_eq!("iZ".parse::<Options>(), Err(Error::InvalidOptionFlag('Z')));
    }
}
