//! Configuration consumed by the compaction-core primitives.

/// Per-compaction-job knobs supplied by the engine's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactionOptions {
    /// Upper bound, in bytes, on how much grandparent-level data a single
    /// output file may overlap before it is split. Must be positive.
    pub max_compaction_bytes: u64,
}

impl Default for CompactionOptions {
    fn default() -> Self {
        Self {
            // 25 target-size output files' worth of overlap at the common
            // 64 MiB target file size.
            max_compaction_bytes: 25 * 64 * 1024 * 1024,
        }
    }
}

impl CompactionOptions {
    /// Override the grandparent-overlap threshold.
    pub fn max_compaction_bytes(self, max_compaction_bytes: u64) -> Self {
        Self {
            max_compaction_bytes,
        }
    }
}
