//! Core types for the moodcheck crates.
//!
//! This crate provides the foundational types for defining check-in forms:
//! - `FormDefinition` - The top-level form structure
//! - `Field` and `FieldKind` - Individual fields and their control kinds
//! - `Answers` and `AnswerValue` - Collected data, keyed by field name
//! - `Session` and `SubmissionStatus` - Per-run state: the answer map and the submit flag
//! - `Survey`, `FormBackend` and `SubmissionSink` traits - For implementing forms and backends

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod field;
pub use field::{ChoiceField, Field, FieldKind, SliderField, TextField, TextFlavor};

mod form_definition;
pub use form_definition::FormDefinition;

mod session;
pub use session::{Session, SubmissionStatus};

mod traits;
pub use traits::{FormBackend, SubmissionSink, Survey};
