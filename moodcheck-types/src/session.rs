use std::marker::PhantomData;

use crate::{Answers, AnswerValue, FormDefinition, SubmissionSink, Survey};

/// Whether the current session's record has been submitted.
///
/// Starts at `NotSubmitted` and flips to `Submitted` on the first successful
/// submit. There is no path back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Submitted,
}

impl SubmissionStatus {
    /// Check whether the record has been submitted.
    pub fn is_submitted(self) -> bool {
        self == Self::Submitted
    }
}

/// State for one run of a form: the answer map plus the submission flag.
///
/// Exactly one session exists per form run. It is created with every field at
/// its initial value, mutated one field at a time as the user interacts, and
/// owned by the caller - backends receive it by reference. Nothing here
/// validates: a backend decides when the form may be submitted.
#[derive(Debug)]
pub struct Session<T: Survey> {
    definition: FormDefinition,
    answers: Answers,
    status: SubmissionStatus,
    _survey: PhantomData<T>,
}

impl<T: Survey> Session<T> {
    /// Create a session with every field seeded to its initial value.
    pub fn new() -> Self {
        let definition = T::definition();
        let mut answers = Answers::new();
        for field in definition.fields() {
            answers.insert(field.name(), field.initial_value());
        }
        Self {
            definition,
            answers,
            status: SubmissionStatus::NotSubmitted,
            _survey: PhantomData,
        }
    }

    /// Get the form definition this session was created from.
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Get the answers collected so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Update exactly one field of the record.
    ///
    /// No cross-field validation, no error conditions; the only effect is the
    /// in-memory update.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(field, value);
    }

    /// Report the current record to the sink and mark the session submitted.
    ///
    /// Performs no validation - backends gate this call behind their own
    /// input checks. Calling it again re-emits the current record; the
    /// already-set flag does not change.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink<T>) {
        let record = T::from_answers(&self.answers);
        sink.submitted(&record);
        self.status = SubmissionStatus::Submitted;
    }
}

impl<T: Survey> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoiceField, Field, FieldKind, SliderField, TextField};

    #[derive(Debug, Clone, PartialEq)]
    struct Snack {
        name: String,
        rating: i64,
        kind: String,
    }

    impl Survey for Snack {
        fn definition() -> FormDefinition {
            FormDefinition::new(
                "Snack check",
                vec![
                    Field::new("name", "Snack name", FieldKind::Text(TextField::new()))
                        .required(),
                    Field::new(
                        "rating",
                        "Rate it",
                        FieldKind::Slider(SliderField::new(1, 5, 3)),
                    ),
                    Field::new(
                        "kind",
                        "Sweet or savory?",
                        FieldKind::Radio(ChoiceField::new(["sweet", "savory"])),
                    ),
                ],
            )
        }

        fn from_answers(answers: &Answers) -> Self {
            Self {
                name: answers.get_text("name").unwrap_or_default().to_string(),
                rating: answers.get_int("rating").unwrap_or(3),
                kind: answers.get_text("kind").unwrap_or_default().to_string(),
            }
        }
    }

    #[derive(Default)]
    struct VecSink(Vec<Snack>);

    impl SubmissionSink<Snack> for VecSink {
        fn submitted(&mut self, record: &Snack) {
            self.0.push(record.clone());
        }
    }

    #[test]
    fn seeds_initial_values() {
        let session = Session::<Snack>::new();
        assert_eq!(session.answers().len(), 3);
        assert_eq!(session.answers().get_text("name").unwrap(), "");
        assert_eq!(session.answers().get_int("rating").unwrap(), 3);
        assert_eq!(session.status(), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn set_updates_one_field() {
        let mut session = Session::<Snack>::new();
        session.set("name", "pretzel");
        assert_eq!(session.answers().get_text("name").unwrap(), "pretzel");
        assert_eq!(session.answers().get_text("kind").unwrap(), "");
    }

    #[test]
    fn submit_emits_record_and_flips_flag() {
        let mut session = Session::<Snack>::new();
        let mut sink = VecSink::default();
        session.set("name", "pretzel");
        session.set("rating", 5);

        session.submit(&mut sink);

        assert_eq!(session.status(), SubmissionStatus::Submitted);
        assert_eq!(
            sink.0,
            vec![Snack {
                name: "pretzel".to_string(),
                rating: 5,
                kind: String::new(),
            }]
        );
    }

    #[test]
    fn repeated_submit_re_emits_without_state_change() {
        let mut session = Session::<Snack>::new();
        let mut sink = VecSink::default();
        session.set("name", "pretzel");

        session.submit(&mut sink);
        session.set("rating", 1);
        session.submit(&mut sink);

        assert_eq!(session.status(), SubmissionStatus::Submitted);
        assert_eq!(sink.0.len(), 2);
        assert_eq!(sink.0[1].rating, 1);
    }
}
