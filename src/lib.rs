//! # gamekit
//!
//! Engine-agnostic game utility toolkit: interval/range math for gameplay
//! values, metric/imperial unit conversion for presentation, and a keyed
//! whole-value file serializer for save-game-style blobs.
//!
//! The three modules are independent of each other; pick what you need.
//!
//! - [`math`]: ordered and freely-ordered intervals in 1/2/3 dimensions,
//!   with clamping, interpolation and containment queries.
//! - [`units`]: a closed table of physical quantity kinds with per-system
//!   multipliers, symbols and names, plus `"<number> <unit>"` formatting.
//! - [`storage`]: save/load/delete of one serialized value per path key,
//!   with read-only "resource" and read-write "file" backings.

pub mod math;
pub mod storage;
pub mod units;

pub use math::{
    Interval, Interval2, Interval3, IntervalInt, SimpleInterval, SimpleInterval2, SimpleInterval3,
};
pub use storage::{DataSerializer, StorageError, StorageMode};
pub use units::{UnitKind, UnitSystem};
