#![deny(missing_docs)]
//! Key-range reservation and grandparent-overlap split primitives for the
//! compaction path of an LSM storage engine.
//!
//! Two independent pieces live here. [`RangeRegistry`] arbitrates which key
//! intervals are currently claimed by compactions, so jobs over intersecting
//! ranges never run concurrently. [`OverlapTracker`] walks the sorted
//! grandparent file list alongside a subcompaction's key stream and decides
//! where output files must be split to cap how much grandparent data a
//! future compaction will have to re-merge. Both route every key comparison
//! through an engine-supplied [`KeyComparator`] rather than raw byte order.

/// Key-comparison capability injected by the storage engine.
pub mod comparator;

/// Errors surfaced by the guard-based reservation API.
mod error;

/// Grandparent file descriptors and the output-file split tracker.
pub mod grandparent;

mod logging;

/// Configuration knobs consumed by the compaction-core primitives.
pub mod option;

/// Key-interval descriptors with explicit endpoint inclusivity.
pub mod range;

/// Concurrent key-range reservation registry.
pub mod registry;

/// Release-on-drop reservation guards.
pub mod reservation;

/// Output-file bookkeeping for subcompactions and compaction runs.
pub mod subcompaction;

pub use crate::{
    comparator::{KeyComparator, OrdComparator},
    error::ReservationError,
    grandparent::{GrandparentFile, OverlapTracker},
    option::CompactionOptions,
    range::RangeDescriptor,
    registry::RangeRegistry,
    reservation::RangeReservation,
    subcompaction::{CompactionRun, OutputFile, SubcompactionOutputs},
};
