//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use pustaka_core::{content, Accordion, Cart, ChatTranscript, ReviewSort, Wishlist, CATALOG};

use crate::config::{Settings, Theme};
use crate::newsletter::NewsletterState;

/// How long each carousel frame stays up before rotating.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal page browsing
    #[default]
    Browse,

    /// Chat widget open - keystrokes go to the chat input
    Chat,

    /// Newsletter form focused - keystrokes go to the email input
    Newsletter,

    /// Compare modal over the page
    Compare,
}

/// The page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Problems,
    Products,
    SocialProof,
    CtaUrgency,
    Reviews,
    Faq,
    Footer,
}

impl Section {
    /// All sections in page order.
    pub const ALL: &'static [Section] = &[
        Section::Hero,
        Section::Problems,
        Section::Products,
        Section::SocialProof,
        Section::CtaUrgency,
        Section::Reviews,
        Section::Faq,
        Section::Footer,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Active tab in the testimonials section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestimonialTab {
    #[default]
    Video,
    Text,
}

/// A fixed-period rotating index (hero images, testimonial quotes).
///
/// Rotation is driven by the event loop's ticks: `advance_if_due`
/// compares against a caller-supplied "now" so tests can fabricate
/// time. The rotation dies with the loop; there is nothing to cancel.
#[derive(Debug)]
pub struct CarouselState {
    index: usize,
    len: usize,
    last_rotation: Instant,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            last_rotation: Instant::now(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Rotate to the next frame if a full period has elapsed, wrapping
    /// modulo the frame count. Returns whether a rotation happened.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_rotation) >= ROTATION_PERIOD {
            self.index = (self.index + 1) % self.len;
            self.last_rotation = now;
            true
        } else {
            false
        }
    }
}

/// Chat widget state: the transcript plus the input line being typed.
#[derive(Debug, Default)]
pub struct ChatState {
    pub transcript: ChatTranscript,
    pub input: String,
}

/// Main application state
pub struct AppState {
    /// Loaded settings
    pub settings: Settings,
    /// Active color scheme (resolved from settings at startup)
    pub theme: Theme,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Index into [`Section::ALL`] of the topmost visible section
    pub top_section: usize,
    /// Index into [`CATALOG`] of the focused product card
    pub selected_book: usize,
    /// Session cart
    pub cart: Cart,
    /// Session wishlist
    pub wishlist: Wishlist,
    /// Review ordering in the testimonials text tab
    pub review_sort: ReviewSort,
    /// Active testimonials tab
    pub testimonial_tab: TestimonialTab,
    /// FAQ accordion
    pub accordion: Accordion,
    /// Hero image rotation
    pub hero: CarouselState,
    /// Testimonial quote rotation
    pub testimonials: CarouselState,
    /// Chat widget
    pub chat: ChatState,
    /// Footer newsletter form
    pub newsletter: NewsletterState,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let theme = settings.resolve_theme();
        Self {
            settings,
            theme,
            ui_mode: UiMode::default(),
            top_section: 0,
            selected_book: 0,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            review_sort: ReviewSort::default(),
            testimonial_tab: TestimonialTab::default(),
            accordion: Accordion::new(),
            hero: CarouselState::new(content::HERO_IMAGES.len()),
            testimonials: CarouselState::new(content::TESTIMONIALS.len()),
            chat: ChatState::default(),
            newsletter: NewsletterState::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Flip the active theme and remember the new value in settings.
    /// Persistence is the event loop's job (see `UpdateAction`).
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.settings.ui.theme = Some(self.theme);
        self.theme
    }

    /// Drive both carousels from a tick.
    pub fn advance_carousels(&mut self, now: Instant) {
        self.hero.advance_if_due(now);
        self.testimonials.advance_if_due(now);
    }

    // ─────────────────────────────────────────────────────────────
    // Page scrolling (section-based)
    // ─────────────────────────────────────────────────────────────

    pub fn scroll_up(&mut self) {
        self.top_section = self.top_section.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.top_section + 1 < Section::ALL.len() {
            self.top_section += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.top_section = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.top_section = Section::ALL.len() - 1;
    }

    /// The CTA jump: bring the product grid to the top of the view.
    pub fn jump_to_products(&mut self) {
        self.top_section = Section::Products.index();
    }

    // ─────────────────────────────────────────────────────────────
    // Product card focus
    // ─────────────────────────────────────────────────────────────

    pub fn select_next_book(&mut self) {
        self.selected_book = (self.selected_book + 1) % CATALOG.len();
    }

    pub fn select_prev_book(&mut self) {
        self.selected_book = (self.selected_book + CATALOG.len() - 1) % CATALOG.len();
    }

    /// The focused catalog entry.
    pub fn focused_book(&self) -> &'static pustaka_core::Book {
        &CATALOG[self.selected_book]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert_eq!(state.top_section, 0);
        assert!(state.cart.is_empty());
        assert!(state.wishlist.is_empty());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_book_selection_wraps_both_ways() {
        let mut state = AppState::new();
        state.select_prev_book();
        assert_eq!(state.selected_book, CATALOG.len() - 1);
        state.select_next_book();
        assert_eq!(state.selected_book, 0);
    }

    #[test]
    fn test_scroll_clamps_to_page_bounds() {
        let mut state = AppState::new();
        state.scroll_up();
        assert_eq!(state.top_section, 0);
        state.scroll_to_bottom();
        state.scroll_down();
        assert_eq!(state.top_section, Section::ALL.len() - 1);
    }

    #[test]
    fn test_jump_to_products() {
        let mut state = AppState::new();
        state.scroll_to_bottom();
        state.jump_to_products();
        assert_eq!(state.top_section, Section::Products.index());
    }

    #[test]
    fn test_carousel_rotates_only_after_full_period() {
        let mut carousel = CarouselState::new(3);
        let start = Instant::now();
        assert!(!carousel.advance_if_due(start + Duration::from_secs(1)));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.advance_if_due(start + ROTATION_PERIOD));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_wraps_modulo_len() {
        let mut carousel = CarouselState::new(3);
        let mut now = Instant::now();
        for expected in [1, 2, 0, 1] {
            now += ROTATION_PERIOD;
            assert!(carousel.advance_if_due(now));
            assert_eq!(carousel.index(), expected);
        }
    }

    #[test]
    fn test_toggle_theme_updates_settings_for_persistence() {
        let mut state = AppState::new();
        let before = state.theme;
        let after = state.toggle_theme();
        assert_eq!(after, before.toggled());
        assert_eq!(state.settings.ui.theme, Some(after));
    }
}
