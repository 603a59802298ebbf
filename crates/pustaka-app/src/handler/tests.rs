//! Handler tests - message dispatch and key routing through update()

use super::{handle_key, update, UpdateAction};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::newsletter::NewsletterStatus;
use crate::state::{AppState, Section, TestimonialTab, UiMode};
use pustaka_core::{ChatSender, ReviewSort, CHAT_GREETING};

fn state() -> AppState {
    AppState::new()
}

// ─────────────────────────────────────────────────────────────────
// Cart
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_add_to_cart_twice_yields_length_two() {
    let mut state = state();
    update(&mut state, Message::AddToCart { id: "b1" });
    update(&mut state, Message::AddToCart { id: "b1" });
    assert_eq!(state.cart.len(), 2);
}

#[test]
fn test_add_three_distinct_books_keeps_order() {
    let mut state = state();
    update(&mut state, Message::AddToCart { id: "b3" });
    update(&mut state, Message::AddToCart { id: "b1" });
    update(&mut state, Message::AddToCart { id: "b2" });
    let ids: Vec<&str> = state.cart.items().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["b3", "b1", "b2"]);
}

#[test]
fn test_add_unknown_id_is_ignored() {
    let mut state = state();
    update(&mut state, Message::AddToCart { id: "b9" });
    assert!(state.cart.is_empty());
}

// ─────────────────────────────────────────────────────────────────
// Wishlist
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_wishlist_double_toggle_restores_state() {
    let mut state = state();
    update(&mut state, Message::ToggleWish { id: "b1" });
    assert!(state.wishlist.contains("b1"));
    update(&mut state, Message::ToggleWish { id: "b1" });
    assert!(!state.wishlist.contains("b1"));
}

// ─────────────────────────────────────────────────────────────────
// Reviews / testimonials
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_review_sort_cycles_through_all_modes() {
    let mut state = state();
    assert_eq!(state.review_sort, ReviewSort::Newest);
    update(&mut state, Message::CycleReviewSort);
    assert_eq!(state.review_sort, ReviewSort::TopRated);
    update(&mut state, Message::CycleReviewSort);
    assert_eq!(state.review_sort, ReviewSort::MostHelpful);
    update(&mut state, Message::CycleReviewSort);
    assert_eq!(state.review_sort, ReviewSort::Newest);
}

#[test]
fn test_testimonial_tab_switch() {
    let mut state = state();
    assert_eq!(state.testimonial_tab, TestimonialTab::Video);
    update(
        &mut state,
        Message::SetTestimonialTab(TestimonialTab::Text),
    );
    assert_eq!(state.testimonial_tab, TestimonialTab::Text);
}

// ─────────────────────────────────────────────────────────────────
// FAQ accordion
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_faq_toggle_same_index_closes() {
    let mut state = state();
    update(&mut state, Message::ToggleFaq { index: 2 });
    assert!(state.accordion.is_open(2));
    update(&mut state, Message::ToggleFaq { index: 2 });
    assert_eq!(state.accordion.open_index(), None);
}

#[test]
fn test_faq_toggle_other_index_moves_opening() {
    let mut state = state();
    update(&mut state, Message::ToggleFaq { index: 2 });
    update(&mut state, Message::ToggleFaq { index: 0 });
    assert_eq!(state.accordion.open_index(), Some(0));
}

// ─────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_requests_persistence() {
    let mut state = state();
    let before = state.theme;
    let result = update(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme, before.toggled());
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistTheme(before.toggled()))
    );
}

// ─────────────────────────────────────────────────────────────────
// Chat widget
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_chat_open_type_submit_close() {
    let mut state = state();
    update(&mut state, Message::OpenChat);
    assert_eq!(state.ui_mode, UiMode::Chat);

    for ch in "halo".chars() {
        update(&mut state, Message::ChatInput { ch });
    }
    update(&mut state, Message::ChatSubmit);

    let messages = state.chat.transcript.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].text, CHAT_GREETING);
    assert_eq!(messages[1].sender, ChatSender::Visitor);
    assert_eq!(messages[1].text, "halo");
    assert_eq!(messages[2].sender, ChatSender::Bot);
    assert!(state.chat.input.is_empty());

    update(&mut state, Message::CloseChat);
    assert_eq!(state.ui_mode, UiMode::Browse);
}

#[test]
fn test_chat_submit_blank_leaves_transcript_alone() {
    let mut state = state();
    update(&mut state, Message::OpenChat);
    update(&mut state, Message::ChatSubmit);
    assert_eq!(state.chat.transcript.len(), 1);
}

// ─────────────────────────────────────────────────────────────────
// Newsletter
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_newsletter_flow_valid_email() {
    let mut state = state();
    update(&mut state, Message::OpenNewsletter);
    for ch in "pembaca@example.com".chars() {
        update(&mut state, Message::NewsletterInput { ch });
    }
    update(&mut state, Message::NewsletterSubmit);
    assert_eq!(state.newsletter.status, NewsletterStatus::Subscribed);
}

#[test]
fn test_newsletter_flow_invalid_email() {
    let mut state = state();
    update(&mut state, Message::OpenNewsletter);
    for ch in "nope".chars() {
        update(&mut state, Message::NewsletterInput { ch });
    }
    update(&mut state, Message::NewsletterSubmit);
    assert_eq!(state.newsletter.status, NewsletterStatus::Invalid);
}

// ─────────────────────────────────────────────────────────────────
// Key routing
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_browse_keys_map_to_messages() {
    let state = state();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::AddToCart { id: "b1" })
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('w')),
        Some(Message::ToggleWish { id: "b1" })
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::CycleReviewSort)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::ToggleFaq { index: 0 })
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('d')),
        Some(Message::ToggleTheme)
    );
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
}

#[test]
fn test_faq_digit_out_of_range_is_ignored() {
    let state = state();
    assert_eq!(handle_key(&state, InputKey::Char('9')), None);
}

#[test]
fn test_add_key_targets_focused_card() {
    let mut state = state();
    update(&mut state, Message::SelectNextBook);
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::AddToCart { id: "b2" })
    );
}

#[test]
fn test_chat_mode_captures_text_keys() {
    let mut state = state();
    update(&mut state, Message::OpenChat);
    // 'q' types into the chat instead of quitting
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::ChatInput { ch: 'q' })
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseChat));
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_compare_mode_only_closes_or_quits() {
    let mut state = state();
    update(&mut state, Message::OpenCompare);
    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        None,
        "cart actions are unavailable under the modal"
    );
    assert_eq!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CloseCompare)
    );
}

#[test]
fn test_cta_key_jumps_to_products() {
    let mut state = state();
    let msg = handle_key(&state, InputKey::Char('b')).unwrap();
    update(&mut state, msg);
    assert_eq!(state.top_section, Section::Products.index());
}

#[test]
fn test_quit_message_sets_flag() {
    let mut state = state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}
