//! Statistics aggregation for the enrollment registry.
//!
//! One pass over the record collection produces residency counts and a
//! year-by-program enrollment breakdown, rendered as a plain-text report.

mod statistics;

pub use statistics::{StatisticsReport, YearBreakdown, summarize};
