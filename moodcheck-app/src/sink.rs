use moodcheck::{MoodEntry, SubmissionSink};
use tracing::{info, warn};

/// Submission sink that reports each completed check-in as one structured
/// log line with the record as a JSON payload.
pub struct LogSink;

impl SubmissionSink<MoodEntry> for LogSink {
    fn submitted(&mut self, record: &MoodEntry) {
        match serde_json::to_string(record) {
            Ok(payload) => info!(%payload, "check-in submitted"),
            Err(err) => warn!(%err, "check-in submitted but could not be serialized"),
        }
    }
}
