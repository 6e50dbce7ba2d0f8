mod region;
mod result;
mod scan;

pub use self::region::{Region, RegionRef};
pub use self::result::{EmptyCapture, MatchResult};
