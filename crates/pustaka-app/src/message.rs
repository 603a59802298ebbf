//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::TestimonialTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (carousel rotation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the page up one section
    ScrollUp,
    /// Scroll the page down one section
    ScrollDown,
    /// Jump to the top of the page
    ScrollToTop,
    /// Jump to the bottom of the page
    ScrollToBottom,
    /// CTA jump to the product grid
    JumpToProducts,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the next product card
    SelectNextBook,
    /// Focus the previous product card
    SelectPrevBook,
    /// Append a catalog item to the cart
    AddToCart { id: &'static str },
    /// Toggle a catalog item on the wishlist
    ToggleWish { id: &'static str },

    // ─────────────────────────────────────────────────────────
    // Testimonials / Reviews
    // ─────────────────────────────────────────────────────────
    /// Cycle to the next review sort mode
    CycleReviewSort,
    /// Switch the testimonials tab
    SetTestimonialTab(TestimonialTab),

    // ─────────────────────────────────────────────────────────
    // FAQ
    // ─────────────────────────────────────────────────────────
    /// Toggle one accordion item
    ToggleFaq { index: usize },

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// Flip dark/light and persist the choice
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Chat Widget
    // ─────────────────────────────────────────────────────────
    OpenChat,
    CloseChat,
    ChatInput { ch: char },
    ChatBackspace,
    ChatSubmit,

    // ─────────────────────────────────────────────────────────
    // Newsletter Form
    // ─────────────────────────────────────────────────────────
    OpenNewsletter,
    CloseNewsletter,
    NewsletterInput { ch: char },
    NewsletterBackspace,
    NewsletterSubmit,

    // ─────────────────────────────────────────────────────────
    // Compare Modal
    // ─────────────────────────────────────────────────────────
    OpenCompare,
    CloseCompare,
}
