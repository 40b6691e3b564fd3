//! moodcheck terminal app.
//!
//! A landing menu in front of the daily check-in form. Submitted check-ins
//! are reported to a logging sink; nothing is persisted.

use anyhow::Result;
use dialoguer::{Select, theme::ColorfulTheme};
use moodcheck::{FormBackend, MoodEntry, Session};
use moodcheck_form_ratatui::{FormError, TerminalForm};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod sink;
use sink::LogSink;

const MENU_ITEMS: &[&str] = &["Take today's check-in", "Log in", "Quit"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("moodcheck");
    println!("How you feel, one check-in at a time. Answer ten quick questions");
    println!("and see your day in context.\n");

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Where to?")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => run_check_in()?,
            1 => println!("Accounts are not available yet - check back soon.\n"),
            _ => break,
        }
    }

    Ok(())
}

fn run_check_in() -> Result<()> {
    let mut session = Session::<MoodEntry>::new();
    let mut sink = LogSink;

    match TerminalForm::new().run(&mut session, &mut sink) {
        Ok(()) => {
            info!("check-in session finished");
            println!("Thanks for checking in!\n");
        }
        Err(FormError::Cancelled) => {
            println!("Check-in dismissed - nothing was recorded.\n");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
