use crate::{Answers, FormDefinition, Session};

/// Trait for record types that can be captured via a form.
///
/// A survey names its field descriptors once, in `definition()`, and the
/// backends render whatever the descriptor list says - there is no per-field
/// rendering code anywhere else.
pub trait Survey: Sized {
    /// Returns the form structure (fields, prompts, control kinds).
    fn definition() -> FormDefinition;

    /// Reconstructs a record from collected answers.
    ///
    /// This is infallible: a session seeds every field with its initial
    /// value, so a field the user never touched reconstructs as that value.
    fn from_answers(answers: &Answers) -> Self;
}

/// The external observer that receives the completed record on submit.
pub trait SubmissionSink<T> {
    /// Called with the full current record each time the form is submitted.
    fn submitted(&mut self, record: &T);
}

/// Trait for backend implementations that drive a form session.
///
/// Backends receive the session by reference, apply `Session::set` for every
/// field interaction, and gate `Session::submit` behind the input checks in
/// `Field::check`. The session never observes a failed check.
pub trait FormBackend<T: Survey> {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Drive the session until it is submitted or the user leaves.
    ///
    /// # Returns
    /// * `Ok(())` once the form has been submitted (even if the user then
    ///   lingers and leaves later)
    /// * `Err` on cancellation before any submit, or on backend failure
    fn run(
        &self,
        session: &mut Session<T>,
        sink: &mut dyn SubmissionSink<T>,
    ) -> Result<(), Self::Error>;
}
