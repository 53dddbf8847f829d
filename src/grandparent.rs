//! Grandparent-overlap tracking for output-file split decisions.
//!
//! While a subcompaction streams merged records into an output file, every
//! byte the output spans at the grandparent level is a byte some future
//! compaction will be forced to re-merge. The [`OverlapTracker`] walks the
//! sorted grandparent file list alongside the key stream and signals when the
//! current output has accumulated enough overlap that it must be closed and a
//! new file started.

use std::cmp::Ordering;

use crate::{comparator::KeyComparator, option::CompactionOptions};

/// Descriptor of a single grandparent-level file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrandparentFile<K> {
    /// Smallest key stored in the file.
    pub smallest: K,
    /// Largest key stored in the file.
    pub largest: K,
    /// File size in bytes.
    pub file_size: u64,
}

impl<K> GrandparentFile<K> {
    /// Build a descriptor from its key bounds and size.
    pub fn new(smallest: K, largest: K, file_size: u64) -> Self {
        Self {
            smallest,
            largest,
            file_size,
        }
    }
}

/// Streaming split-point decision over one subcompaction's key sequence.
///
/// Owned exclusively by the subcompaction driving it; keys must be fed in
/// strictly increasing order. The tracker borrows the grandparent list, which
/// must be pairwise non-overlapping and ascending by key, and never examines
/// a grandparent file twice: the cursor only moves forward, and a signaled
/// split resets the byte accumulator alone.
#[derive(Debug)]
pub struct OverlapTracker<'a, K, C> {
    comparator: &'a C,
    grandparents: &'a [GrandparentFile<K>],
    max_compaction_bytes: u64,
    grandparent_index: usize,
    overlapped_bytes: u64,
    seen_key: bool,
}

impl<'a, K, C> OverlapTracker<'a, K, C>
where
    C: KeyComparator<K>,
{
    /// Build a tracker for one subcompaction over `grandparents`.
    ///
    /// `options.max_compaction_bytes` must be positive.
    pub fn new(
        comparator: &'a C,
        grandparents: &'a [GrandparentFile<K>],
        options: &CompactionOptions,
    ) -> Self {
        debug_assert!(options.max_compaction_bytes > 0);
        Self {
            comparator,
            grandparents,
            max_compaction_bytes: options.max_compaction_bytes,
            grandparent_index: 0,
            overlapped_bytes: 0,
            seen_key: false,
        }
    }

    /// Decide whether the current output file must be closed before `key`.
    ///
    /// Advances the grandparent cursor past every file whose largest key
    /// orders before `key`, charging each passed file's size to the overlap
    /// accumulator — except on the very first call, where files lying
    /// entirely before the subcompaction's starting key are only skipped:
    /// this output never truly overlaps them.
    ///
    /// Returns `true` when accumulated grandparent overlap plus
    /// `current_output_bytes` exceeds the configured threshold; the
    /// accumulator is then reset so scanning resumes for the next output
    /// file, while the cursor stays put.
    ///
    /// # Panics
    ///
    /// Panics if consecutive grandparent files are out of order, which
    /// signals upstream file-bookkeeping corruption.
    pub fn should_split(&mut self, key: &K, current_output_bytes: u64) -> bool {
        while let Some(file) = self.grandparents.get(self.grandparent_index) {
            if self.comparator.compare(key, &file.largest) != Ordering::Greater {
                break;
            }
            if self.seen_key {
                self.overlapped_bytes += file.file_size;
            }
            if let Some(next) = self.grandparents.get(self.grandparent_index + 1) {
                assert!(
                    self.comparator.compare(&file.largest, &next.smallest) != Ordering::Greater,
                    "grandparent files out of order",
                );
            }
            self.grandparent_index += 1;
        }
        self.seen_key = true;

        if self.overlapped_bytes + current_output_bytes > self.max_compaction_bytes {
            // Too much overlap for the current output; start a new one.
            self.overlapped_bytes = 0;
            return true;
        }
        false
    }

    /// Position of the cursor in the grandparent list. Monotonically
    /// non-decreasing over the tracker's lifetime.
    pub fn grandparent_index(&self) -> usize {
        self.grandparent_index
    }

    /// Grandparent bytes charged against the current output file so far.
    pub fn overlapped_bytes(&self) -> u64 {
        self.overlapped_bytes
    }
}
