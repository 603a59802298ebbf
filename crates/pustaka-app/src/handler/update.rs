//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use pustaka_core::prelude::*;
use pustaka_core::find_book;

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.advance_carousels(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll_up();
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.scroll_to_bottom();
            UpdateResult::none()
        }
        Message::JumpToProducts => {
            state.jump_to_products();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextBook => {
            state.select_next_book();
            UpdateResult::none()
        }
        Message::SelectPrevBook => {
            state.select_prev_book();
            UpdateResult::none()
        }
        Message::AddToCart { id } => {
            match find_book(id) {
                Ok(book) => {
                    state.cart.add(book);
                    debug!(
                        "Added {} to cart (len {})",
                        book.title,
                        state.cart.len()
                    );
                }
                Err(e) => warn!("Ignoring add-to-cart: {e}"),
            }
            UpdateResult::none()
        }
        Message::ToggleWish { id } => {
            let wished = state.wishlist.toggle(id);
            debug!("Wishlist toggle {id}: now {wished}");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Testimonials / Reviews
        // ─────────────────────────────────────────────────────────
        Message::CycleReviewSort => {
            state.review_sort = state.review_sort.next();
            UpdateResult::none()
        }
        Message::SetTestimonialTab(tab) => {
            state.testimonial_tab = tab;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // FAQ
        // ─────────────────────────────────────────────────────────
        Message::ToggleFaq { index } => {
            state.accordion.toggle(index);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let theme = state.toggle_theme();
            UpdateResult::action(UpdateAction::PersistTheme(theme))
        }

        // ─────────────────────────────────────────────────────────
        // Chat Widget
        // ─────────────────────────────────────────────────────────
        Message::OpenChat => {
            state.ui_mode = UiMode::Chat;
            UpdateResult::none()
        }
        Message::CloseChat => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::ChatInput { ch } => {
            state.chat.input.push(ch);
            UpdateResult::none()
        }
        Message::ChatBackspace => {
            state.chat.input.pop();
            UpdateResult::none()
        }
        Message::ChatSubmit => {
            let text = std::mem::take(&mut state.chat.input);
            state.chat.transcript.send(&text);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Newsletter Form
        // ─────────────────────────────────────────────────────────
        Message::OpenNewsletter => {
            state.ui_mode = UiMode::Newsletter;
            // The form lives in the footer; bring it into view.
            state.scroll_to_bottom();
            UpdateResult::none()
        }
        Message::CloseNewsletter => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::NewsletterInput { ch } => {
            state.newsletter.push_char(ch);
            UpdateResult::none()
        }
        Message::NewsletterBackspace => {
            state.newsletter.backspace();
            UpdateResult::none()
        }
        Message::NewsletterSubmit => {
            state.newsletter.submit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Compare Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenCompare => {
            state.ui_mode = UiMode::Compare;
            UpdateResult::none()
        }
        Message::CloseCompare => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
    }
}
