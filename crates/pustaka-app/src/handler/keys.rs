//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, TestimonialTab, UiMode};
use pustaka_core::FAQ_ITEMS;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Chat => handle_key_chat(key),
        UiMode::Newsletter => handle_key_newsletter(key),
        UiMode::Compare => handle_key_compare(key),
    }
}

/// Handle key events while browsing the page
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Page scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::ScrollDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::Char('b') => Some(Message::JumpToProducts),

        // Product focus and actions
        InputKey::Left | InputKey::Char('h') => Some(Message::SelectPrevBook),
        InputKey::Right | InputKey::Char('l') => Some(Message::SelectNextBook),
        InputKey::Enter | InputKey::Char('a') => Some(Message::AddToCart {
            id: state.focused_book().id,
        }),
        InputKey::Char('w') => Some(Message::ToggleWish {
            id: state.focused_book().id,
        }),

        // Testimonials / reviews
        InputKey::Char('s') => Some(Message::CycleReviewSort),
        InputKey::Char('v') => Some(Message::SetTestimonialTab(TestimonialTab::Video)),
        InputKey::Char('t') => Some(Message::SetTestimonialTab(TestimonialTab::Text)),

        // FAQ accordion: digits address items directly
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < FAQ_ITEMS.len() {
                Some(Message::ToggleFaq { index })
            } else {
                None
            }
        }

        // Theme
        InputKey::Char('d') => Some(Message::ToggleTheme),

        // Overlays
        InputKey::Char('c') => Some(Message::OpenChat),
        InputKey::Char('n') => Some(Message::OpenNewsletter),
        InputKey::Char('x') => Some(Message::OpenCompare),

        _ => None,
    }
}

/// Handle key events while the chat input has focus
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseChat),
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(ch) => Some(Message::ChatInput { ch }),
        _ => None,
    }
}

/// Handle key events while the newsletter email field has focus
fn handle_key_newsletter(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseNewsletter),
        InputKey::Enter => Some(Message::NewsletterSubmit),
        InputKey::Backspace => Some(Message::NewsletterBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(ch) => Some(Message::NewsletterInput { ch }),
        _ => None,
    }
}

/// Handle key events while the compare modal is up
fn handle_key_compare(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('x') | InputKey::Enter => Some(Message::CloseCompare),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
