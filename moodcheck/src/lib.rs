//! # moodcheck
//!
//! Capture core for the moodcheck daily check-in: one fixed, flat survey
//! collected through whichever backend the caller wires up.
//!
//! The survey is data-driven: [`MoodEntry::definition`] is the single list of
//! field descriptors, and backends render whatever that list says. A run
//! revolves around a [`Session`], which owns the answer map and the
//! submission flag; on submit, the completed [`MoodEntry`] is reported to a
//! [`SubmissionSink`].
//!
//! ## Usage
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
//!     .run(&mut session, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(sink.records()[0].email, "a@b.com");
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `FormBackend`:
//! - `moodcheck-form-ratatui` - terminal form with all fields visible
//! - [`TestBackend`] (here) - scripted answers for tests

// Re-export all types from moodcheck-types
pub use moodcheck_types::*;

mod entry;
pub use entry::{MoodEntry, SCALE_DEFAULT, SCALE_MAX, SCALE_MIN};

mod sink;
pub use sink::RecordingSink;

// Test backend for driving forms without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
