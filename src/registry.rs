//! Concurrent key-range reservation registry.
//!
//! Arbitrates which key intervals are currently claimed by compactions so
//! that no two jobs run over intersecting ranges at the same time. Every
//! operation executes inside one mutex critical section, so overlap checks
//! always observe a consistent snapshot and state is never seen partially
//! updated.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    comparator::KeyComparator,
    logging::{LogContext, fence_log},
    range::RangeDescriptor,
};

const LOG_CTX: LogContext = LogContext::new("component=range_registry");

/// Registry of currently-reserved key ranges, shared by any number of
/// compaction coordinators.
///
/// The registry owns its mutual exclusion: [`register`](Self::register) and
/// [`unregister`](Self::unregister) are linearizable and never block beyond
/// the critical-section wait. A failed registration is an immediate "busy"
/// result, not a wait.
#[derive(Debug)]
pub struct RangeRegistry<K, C> {
    comparator: C,
    reserved: Mutex<Vec<RangeDescriptor<K>>>,
}

impl<K, C> RangeRegistry<K, C>
where
    C: KeyComparator<K>,
{
    /// Build an empty registry around the engine-supplied comparator.
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            reserved: Mutex::new(Vec::new()),
        }
    }

    /// Attempt to reserve `range`, returning whether the claim succeeded.
    ///
    /// An empty range always succeeds (the entry is still recorded). The
    /// unbounded sentinel succeeds only while the registry holds zero
    /// non-empty entries. A finite non-empty range succeeds only when it is
    /// disjoint from every registered non-empty entry. On failure nothing is
    /// mutated.
    pub fn register(&self, range: RangeDescriptor<K>) -> bool {
        let mut reserved = self.lock();

        if range.is_empty(&self.comparator) {
            // Empty intervals can never conflict with anything, including
            // an in-flight unbounded reservation.
            reserved.push(range);
            return true;
        }

        let conflict = if range.is_infinite {
            reserved.iter().any(|held| !held.is_empty(&self.comparator))
        } else {
            reserved.iter().any(|held| {
                !held.is_empty(&self.comparator) && !range.is_disjoint(held, &self.comparator)
            })
        };
        if conflict {
            fence_log!(
                log::Level::Debug,
                ctx: LOG_CTX,
                "register_conflict",
                "reserved={} infinite={}",
                reserved.len(),
                range.is_infinite,
            );
            return false;
        }

        reserved.push(range);
        fence_log!(
            log::Level::Debug,
            ctx: LOG_CTX,
            "register",
            "reserved={}",
            reserved.len(),
        );
        true
    }

    /// Release exactly one entry structurally equal to `range`.
    ///
    /// Returns `false` when no such entry exists, which is a caller-contract
    /// violation (double-release or releasing a never-reserved range): fatal
    /// in debug builds, a logged anomaly in release builds. Registry state is
    /// unaffected either way.
    pub fn unregister(&self, range: &RangeDescriptor<K>) -> bool
    where
        K: PartialEq,
    {
        let mut reserved = self.lock();
        match reserved.iter().position(|held| held == range) {
            Some(at) => {
                reserved.remove(at);
                fence_log!(
                    log::Level::Debug,
                    ctx: LOG_CTX,
                    "unregister",
                    "reserved={}",
                    reserved.len(),
                );
                true
            }
            None => {
                fence_log!(
                    log::Level::Warn,
                    ctx: LOG_CTX,
                    "unregister_miss",
                    "released a range that is not reserved (double release?)",
                );
                debug_assert!(false, "released a range that is not reserved");
                false
            }
        }
    }

    /// Number of entries currently held, empty reservations included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no reservation of any kind is held.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Access the comparator this registry arbitrates with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RangeDescriptor<K>>> {
        // A poisoned lock can only come from a panicking comparator; the
        // reserved set is only mutated after all checks pass, so the data is
        // still consistent and safe to reuse.
        self.reserved.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
