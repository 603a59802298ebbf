//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use pustaka_app::{AppState, Section, UiMode};

use crate::layout;
use crate::theme::{palette, IconSet};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette(state.theme);
    let icons = IconSet::new(state.settings.ui.icons);

    // Fill entire terminal with the page background
    let bg_block = Block::default().style(Style::default().bg(p.page_bg));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.top_section);

    let header = widgets::Header::new(
        state.cart.len(),
        state.wishlist.len(),
        state.theme,
        p,
        icons,
    );
    frame.render_widget(header, areas.header);

    for (section, rect) in &areas.sections {
        match section {
            Section::Hero => {
                frame.render_widget(widgets::Hero::new(state.hero.index(), p, icons), *rect)
            }
            Section::Problems => frame.render_widget(widgets::Problems::new(p), *rect),
            Section::Products => frame.render_widget(
                widgets::Products::new(state.selected_book, &state.wishlist, p, icons),
                *rect,
            ),
            Section::SocialProof => frame.render_widget(
                widgets::SocialProof::new(state.testimonials.index(), p, icons),
                *rect,
            ),
            Section::CtaUrgency => frame.render_widget(widgets::CtaBanner::new(p, icons), *rect),
            Section::Reviews => frame.render_widget(
                widgets::Reviews::new(state.testimonial_tab, state.review_sort, p, icons),
                *rect,
            ),
            Section::Faq => {
                frame.render_widget(widgets::Faq::new(&state.accordion, p, icons), *rect)
            }
            Section::Footer => frame.render_widget(
                widgets::Footer::new(
                    &state.newsletter,
                    state.ui_mode == UiMode::Newsletter,
                    p,
                ),
                *rect,
            ),
        }
    }

    // Free-shipping bar floats over the page while the cart has items.
    if !state.cart.is_empty() && state.ui_mode != UiMode::Compare {
        let bar_area = shipping_bar_area(area);
        frame.render_widget(Clear, bar_area);
        frame.render_widget(widgets::ShippingBar::new(state.cart.len(), p, icons), bar_area);
    }

    match state.ui_mode {
        UiMode::Chat => {
            let chat_area = widgets::chat::overlay_area(area);
            frame.render_widget(
                widgets::ChatWindow::new(
                    &state.chat.transcript,
                    &state.chat.input,
                    p,
                    icons,
                ),
                chat_area,
            );
        }
        UiMode::Compare => {
            let modal_area = widgets::compare::overlay_area(area);
            frame.render_widget(widgets::CompareModal::new(p), modal_area);
        }
        UiMode::Browse | UiMode::Newsletter => {}
    }
}

/// Bottom-centered strip for the free-shipping bar.
fn shipping_bar_area(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(4).min(64).max(1);
    let height = 4.min(screen.height);
    Rect {
        x: screen.x + (screen.width.saturating_sub(width)) / 2,
        y: screen.y + screen.height.saturating_sub(height),
        width,
        height,
    }
}
