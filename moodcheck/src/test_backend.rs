//! Test backend for driving forms without user interaction.
//!
//! `TestBackend` plays back pre-configured answers against a session, runs
//! the same input checks an interactive form runs, and submits. This is
//! useful for testing capture behavior end to end.
//!
//! # Example
//!
//! ```rust
//! use moodcheck::{MoodEntry, RecordingSink, Session, TestBackend};
//! use moodcheck_types::FormBackend;
//!
//! let mut session = Session::<MoodEntry>::new();
//! let mut sink = RecordingSink::new();
//!
//! TestBackend::new()
//!     .with_text("email", "a@b.com")
//!     .with_text("age", "30")
//!     .with_text("mood", "happy")
//!     .run(&mut session, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(sink.last().unwrap().mood, "happy");
//! ```

use std::collections::HashMap;

use moodcheck_types::{AnswerValue, FormBackend, Session, SubmissionSink, Survey};

/// A backend that plays back pre-configured answers and submits.
///
/// Fields without a scripted answer keep their initial value, exactly like
/// fields the user never touches in an interactive form.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: HashMap<String, AnswerValue>,
}

/// Error type for `TestBackend`.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("No field named '{0}' in the form")]
    UnknownField(String),

    #[error("Submission blocked on '{field}': {message}")]
    Blocked { field: String, message: String },
}

impl TestBackend {
    /// Create a new backend with no scripted answers.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Script an answer for the given field.
    pub fn with_answer(
        mut self,
        field: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Self {
        self.answers.insert(field.into(), value.into());
        self
    }

    /// Script a text answer (text inputs, selects, radios).
    pub fn with_text(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_answer(field, AnswerValue::Text(value.into()))
    }

    /// Script an integer answer (sliders).
    pub fn with_int(self, field: impl Into<String>, value: i64) -> Self {
        self.with_answer(field, AnswerValue::Int(value))
    }
}

impl<T: Survey> FormBackend<T> for TestBackend {
    type Error = TestBackendError;

    fn run(
        &self,
        session: &mut Session<T>,
        sink: &mut dyn SubmissionSink<T>,
    ) -> Result<(), Self::Error> {
        let fields = session.definition().fields().to_vec();

        for name in self.answers.keys() {
            if !fields.iter().any(|f| f.name() == name) {
                return Err(TestBackendError::UnknownField(name.clone()));
            }
        }

        // Apply scripted answers one interaction at a time, in field order.
        for field in &fields {
            if let Some(value) = self.answers.get(field.name()) {
                session.set(field.name(), value.clone());
            }
        }

        // The same gate an interactive form applies before allowing submit:
        // a failing field blocks the whole submission and nothing is emitted.
        for field in &fields {
            if let Some(value) = session.answers().get(field.name())
                && let Err(message) = field.check(value)
            {
                return Err(TestBackendError::Blocked {
                    field: field.name().to_string(),
                    message,
                });
            }
        }

        session.submit(sink);
        Ok(())
    }
}
