use moodcheck_types::SubmissionSink;

/// A sink that buffers every submitted record in memory.
///
/// Useful in tests and anywhere the caller wants to inspect what a form run
/// emitted.
#[derive(Debug, Clone)]
pub struct RecordingSink<T> {
    records: Vec<T>,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordingSink<T> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records received so far, in submission order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The most recently submitted record, if any.
    pub fn last(&self) -> Option<&T> {
        self.records.last()
    }

    /// The number of submissions observed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether any submission has been observed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> SubmissionSink<T> for RecordingSink<T> {
    fn submitted(&mut self, record: &T) {
        self.records.push(record.clone());
    }
}
