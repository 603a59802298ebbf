//! Newsletter signup form state.
//!
//! Validation is format-only and the submit goes nowhere: the footer
//! form shows a local acknowledgment and that is the whole feature.

use std::sync::OnceLock;

use regex::Regex;

use pustaka_core::prelude::*;

/// Display-level outcome of the last submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsletterStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Format check passed; acknowledgment shown.
    Subscribed,
    /// Format check failed.
    Invalid,
}

/// State of the footer newsletter form.
#[derive(Debug, Default)]
pub struct NewsletterState {
    pub input: String,
    pub status: NewsletterStatus,
}

impl NewsletterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
        self.status = NewsletterStatus::Idle;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.status = NewsletterStatus::Idle;
    }

    /// Validate the current input and record the outcome.
    ///
    /// On success the field is cleared, mirroring a form reset.
    pub fn submit(&mut self) {
        match validate_email(self.input.trim()) {
            Ok(()) => {
                info!("Newsletter signup acknowledged");
                self.input.clear();
                self.status = NewsletterStatus::Subscribed;
            }
            Err(_) => {
                self.status = NewsletterStatus::Invalid;
            }
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Format-only email check, the same constraint a `type="email"`
/// required field enforces.
pub fn validate_email(input: &str) -> Result<()> {
    if email_regex().is_match(input) {
        Ok(())
    } else {
        Err(Error::invalid_email(input))
    }
}
