//! Output-file bookkeeping for subcompactions and whole compaction runs.
//!
//! Split-point decisions live in [`crate::grandparent`]; the types here only
//! record what each subcompaction produced, so the two concerns stay
//! independently testable.

use crate::range::RangeDescriptor;

/// Metadata recorded for one output file of a subcompaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile<K> {
    /// Smallest key written to the file, once known.
    pub smallest: Option<K>,
    /// Largest key written to the file, once known.
    pub largest: Option<K>,
    /// File size in bytes.
    pub file_size: u64,
    /// Whether the file has been finalized.
    pub finished: bool,
}

impl<K> Default for OutputFile<K> {
    fn default() -> Self {
        Self {
            smallest: None,
            largest: None,
            file_size: 0,
            finished: false,
        }
    }
}

/// Bookkeeping for the output-file stream of a single subcompaction.
///
/// A subcompaction may produce no output at all when the compaction is
/// aborted before it runs; accessors return `None` in that case rather than
/// presuming a current file exists.
#[derive(Debug)]
pub struct SubcompactionOutputs<K> {
    range: RangeDescriptor<K>,
    outputs: Vec<OutputFile<K>>,
    total_bytes: u64,
    num_input_records: u64,
    num_output_records: u64,
}

impl<K> SubcompactionOutputs<K> {
    /// Start bookkeeping for the subcompaction claiming `range`.
    pub fn new(range: RangeDescriptor<K>) -> Self {
        Self {
            range,
            outputs: Vec::new(),
            total_bytes: 0,
            num_input_records: 0,
            num_output_records: 0,
        }
    }

    /// The key range this subcompaction is responsible for.
    pub fn range(&self) -> &RangeDescriptor<K> {
        &self.range
    }

    /// Open a new output file and make it current.
    pub fn begin_output(&mut self) -> &mut OutputFile<K> {
        self.outputs.push(OutputFile::default());
        self.outputs.last_mut().expect("just pushed")
    }

    /// The output currently being generated, if any.
    pub fn current_output(&self) -> Option<&OutputFile<K>> {
        self.outputs.last()
    }

    /// Finalize the current output with its key bounds and size.
    ///
    /// Returns `false` (leaving state untouched) when no output is open or
    /// the current one is already finished.
    pub fn finish_output(&mut self, smallest: K, largest: K, file_size: u64) -> bool {
        let Some(output) = self.outputs.last_mut() else {
            return false;
        };
        if output.finished {
            return false;
        }
        output.smallest = Some(smallest);
        output.largest = Some(largest);
        output.file_size = file_size;
        output.finished = true;
        self.total_bytes += file_size;
        true
    }

    /// All outputs recorded so far, in production order.
    pub fn outputs(&self) -> &[OutputFile<K>] {
        &self.outputs
    }

    /// Charge `records` input records to this subcompaction.
    pub fn add_input_records(&mut self, records: u64) {
        self.num_input_records += records;
    }

    /// Charge `records` output records to this subcompaction.
    pub fn add_output_records(&mut self, records: u64) {
        self.num_output_records += records;
    }

    /// Total bytes across finished outputs.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Records consumed from the merge input.
    pub fn num_input_records(&self) -> u64 {
        self.num_input_records
    }

    /// Records written across all outputs.
    pub fn num_output_records(&self) -> u64 {
        self.num_output_records
    }
}

/// Aggregate bookkeeping for one whole compaction.
///
/// Subcompactions must be pushed in ascending key-range order; the
/// smallest/largest accessors rely on it.
#[derive(Debug, Default)]
pub struct CompactionRun<K> {
    subcompactions: Vec<SubcompactionOutputs<K>>,
}

impl<K> CompactionRun<K> {
    /// Build an empty run.
    pub fn new() -> Self {
        Self {
            subcompactions: Vec::new(),
        }
    }

    /// Append the next subcompaction, in key order.
    pub fn push(&mut self, subcompaction: SubcompactionOutputs<K>) {
        self.subcompactions.push(subcompaction);
    }

    /// The recorded subcompactions, in key order.
    pub fn subcompactions(&self) -> &[SubcompactionOutputs<K>] {
        &self.subcompactions
    }

    /// Number of output files across all subcompactions.
    pub fn num_output_files(&self) -> usize {
        self.subcompactions.iter().map(|s| s.outputs.len()).sum()
    }

    /// Smallest key covered by any finished output, if one exists.
    pub fn smallest_key(&self) -> Option<&K> {
        self.subcompactions
            .iter()
            .find_map(|s| match s.outputs.first() {
                Some(output) if output.finished => output.smallest.as_ref(),
                _ => None,
            })
    }

    /// Largest key covered by any finished output, if one exists.
    pub fn largest_key(&self) -> Option<&K> {
        self.subcompactions
            .iter()
            .rev()
            .find_map(|s| match s.outputs.last() {
                Some(output) if output.finished => output.largest.as_ref(),
                _ => None,
            })
    }

    /// Total bytes across finished outputs of all subcompactions.
    pub fn total_bytes(&self) -> u64 {
        self.subcompactions.iter().map(|s| s.total_bytes).sum()
    }

    /// Records consumed across all subcompactions.
    pub fn num_input_records(&self) -> u64 {
        self.subcompactions.iter().map(|s| s.num_input_records).sum()
    }

    /// Records written across all subcompactions.
    pub fn num_output_records(&self) -> u64 {
        self.subcompactions
            .iter()
            .map(|s| s.num_output_records)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{CompactionRun, SubcompactionOutputs};
    use crate::range::RangeDescriptor;

    #[test]
    fn no_output_until_one_is_begun() {
        let sub = SubcompactionOutputs::<u64>::new(RangeDescriptor::half_open(0, 10));
        assert!(sub.current_output().is_none());
        assert_eq!(sub.outputs().len(), 0);
    }

    #[test]
    fn finish_output_records_bounds_and_bytes() {
        let mut sub = SubcompactionOutputs::new(RangeDescriptor::half_open(0u64, 100));
        sub.begin_output();
        assert!(!sub.current_output().unwrap().finished);

        assert!(sub.finish_output(3, 42, 512));
        let output = sub.current_output().unwrap();
        assert_eq!(output.smallest, Some(3));
        assert_eq!(output.largest, Some(42));
        assert!(output.finished);
        assert_eq!(sub.total_bytes(), 512);

        // Double-finish and finishing with nothing open are rejected.
        assert!(!sub.finish_output(3, 42, 512));
        let mut fresh = SubcompactionOutputs::<u64>::new(RangeDescriptor::half_open(0, 1));
        assert!(!fresh.finish_output(0, 0, 0));
    }

    #[test]
    fn counters_accumulate() {
        let mut sub = SubcompactionOutputs::<u64>::new(RangeDescriptor::half_open(0, 10));
        sub.add_input_records(10);
        sub.add_input_records(5);
        sub.add_output_records(12);
        assert_eq!(sub.num_input_records(), 15);
        assert_eq!(sub.num_output_records(), 12);
    }

    #[test]
    fn run_aggregates_in_key_order() {
        let mut low = SubcompactionOutputs::new(RangeDescriptor::half_open(0u64, 50));
        low.begin_output();
        low.finish_output(1, 20, 100);
        low.begin_output();
        low.finish_output(21, 49, 100);
        low.add_input_records(8);
        low.add_output_records(6);

        let mut high = SubcompactionOutputs::new(RangeDescriptor::half_open(50u64, 100));
        high.begin_output();
        high.finish_output(50, 90, 300);
        high.add_input_records(4);
        high.add_output_records(4);

        let mut run = CompactionRun::new();
        run.push(low);
        run.push(high);

        assert_eq!(run.num_output_files(), 3);
        assert_eq!(run.smallest_key(), Some(&1));
        assert_eq!(run.largest_key(), Some(&90));
        assert_eq!(run.total_bytes(), 500);
        assert_eq!(run.num_input_records(), 12);
        assert_eq!(run.num_output_records(), 10);
    }

    #[test]
    fn unfinished_tail_output_is_skipped_for_bounds() {
        let mut sub = SubcompactionOutputs::new(RangeDescriptor::half_open(0u64, 50));
        sub.begin_output();
        sub.finish_output(1, 20, 100);
        sub.begin_output(); // still being generated

        let mut run = CompactionRun::new();
        run.push(sub);

        // An aborted run may leave the last output unfinished; its bounds do
        // not count, but the file slot itself does.
        assert_eq!(run.num_output_files(), 2);
        assert_eq!(run.smallest_key(), Some(&1));
        assert_eq!(run.largest_key(), None);
    }

    #[test]
    fn empty_run_reports_nothing() {
        let run = CompactionRun::<u64>::new();
        assert_eq!(run.num_output_files(), 0);
        assert_eq!(run.smallest_key(), None);
        assert_eq!(run.largest_key(), None);
    }
}
