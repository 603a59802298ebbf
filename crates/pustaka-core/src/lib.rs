//! # pustaka-core - Core Storefront Domain
//!
//! Foundation crate for Pustaka. Provides the static catalog and marketing
//! copy plus the handful of state containers the storefront actually needs.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Book`] - One static catalog record
//! - [`CATALOG`] - The three seeded titles
//! - [`find_book()`], [`format_idr()`]
//!
//! ### Session State (`cart`, `wishlist`)
//! - [`Cart`] - Ordered, append-only selection
//! - [`Wishlist`] - Toggleable id set
//!
//! ### Reviews (`review`)
//! - [`Review`], [`REVIEWS`] - Seeded reader reviews
//! - [`ReviewSort`], [`sort_reviews()`] - Stable re-ordering on demand
//!
//! ### Page Furniture (`faq`, `chat`, `shipping`, `content`)
//! - [`FaqItem`], [`FAQ_ITEMS`], [`Accordion`] - Single-open accordion
//! - [`ChatTranscript`] - Scripted live-chat transcript
//! - [`shipping`] - Free-shipping threshold math
//! - [`content`] - Hero/testimonial/footer seed copy
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pustaka_core::prelude::*;
//! ```

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod content;
pub mod error;
pub mod faq;
pub mod logging;
pub mod review;
pub mod shipping;
pub mod wishlist;

/// Prelude for common imports used throughout all Pustaka crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use cart::Cart;
pub use catalog::{find_book, format_idr, Book, CATALOG};
pub use chat::{ChatMessage, ChatSender, ChatTranscript, CHAT_AUTO_REPLY, CHAT_GREETING};
pub use error::{Error, Result};
pub use faq::{Accordion, FaqItem, FAQ_ITEMS};
pub use review::{sort_reviews, Review, ReviewSort, REVIEWS};
pub use wishlist::Wishlist;
