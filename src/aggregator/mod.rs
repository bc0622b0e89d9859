//! The aggregation core: generation-tagged concurrent fan-out with
//! incremental delivery, and the final settle sort.
//!
//! One [`SearchSession`] owns the generation counter that retires
//! superseded runs; [`sort`] holds the one-time reordering pass applied
//! after all providers have reported.

pub mod session;
pub mod sort;

pub use session::SearchSession;
