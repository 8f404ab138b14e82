//! Class break strategies

pub mod equal;
pub mod fixed;
pub mod head_tails;
pub mod natural;
pub mod pretty;
pub mod quantile;
pub mod std_dev;

pub use equal::EqualIntervalBreaks;
pub use fixed::{ClipPolicy, FixedBreaks};
pub use head_tails::HeadTailBreaks;
pub use natural::NaturalBreaks;
pub use pretty::PrettyBreaks;
pub use quantile::QuantileBreaks;
pub use std_dev::StdDevBreaks;
