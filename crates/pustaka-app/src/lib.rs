//! pustaka-app - Application state and orchestration for Pustaka
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the `AppState` model, the `Message` vocabulary, the
//! `update()` transition function, mode-aware key routing, configuration
//! loading, and the newsletter form logic.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod newsletter;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{FileThemeStore, IconMode, Settings, Theme, ThemeStore};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use newsletter::{NewsletterState, NewsletterStatus};
pub use state::{AppState, Section, TestimonialTab, UiMode};
