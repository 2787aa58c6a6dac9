//! Generic record extraction over parsed trees
//!
//! Two independent primitives: row matching against column constraints,
//! and sibling-stream segmentation into key/value records. Callers pick
//! the subtree to feed in and compose the two.

mod records;
mod rows;

pub use records::{segment, Record, SegmentConfig};
pub use rows::{find_link, RowConstraint};
