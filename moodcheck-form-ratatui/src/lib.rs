//! # moodcheck-form-ratatui
//!
//! Terminal form backend for moodcheck.
//!
//! Displays the whole check-in at once in a scrollable form, with text
//! inputs, selects, radio groups and sliders rendered from the field
//! descriptor list. Users navigate with Tab/Shift+Tab or the arrow keys and
//! submit with the button after the last field.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moodcheck::{FormBackend, MoodEntry, RecordingSink, Session};
//! use moodcheck_form_ratatui::TerminalForm;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Session::<MoodEntry>::new();
//!     let mut sink = RecordingSink::new();
//!     TerminalForm::new().run(&mut session, &mut sink)?;
//!     println!("{:#?}", sink.last());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{FormError, TerminalForm, Theme};
