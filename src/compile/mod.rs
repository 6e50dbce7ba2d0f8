mod names;
mod options;
mod pattern;

pub use self::options::Options;
pub use self::pattern::Regex;
