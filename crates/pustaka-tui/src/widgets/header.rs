//! Sticky header bar
//!
//! Shop name on the left; wishlist/cart counters, theme indicator and
//! the key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use pustaka_app::Theme;
use pustaka_core::content;

use crate::theme::{styles, IconSet, Palette};

/// Main header showing the shop name, session counters and keybindings
pub struct Header<'a> {
    cart_len: usize,
    wishlist_len: usize,
    theme: Theme,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(
        cart_len: usize,
        wishlist_len: usize,
        theme: Theme,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            cart_len,
            wishlist_len,
            theme,
            palette,
            icons,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(self.icons.book(), styles::accent(self.palette)),
            Span::raw(" "),
            Span::styled(content::SHOP_NAME, styles::heading(self.palette)),
        ]);
        title.render(inner, buf);

        let theme_glyph = match self.theme {
            Theme::Dark => self.icons.moon(),
            Theme::Light => self.icons.sun(),
        };

        let mut status = vec![
            Span::styled(
                format!("{} {}", self.icons.heart_filled(), self.wishlist_len),
                styles::accent(self.palette),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} ", self.icons.cart()),
                styles::text_primary(self.palette),
            ),
        ];
        if self.cart_len > 0 {
            status.push(Span::styled(
                format!(" {} ", self.cart_len),
                styles::badge(self.palette),
            ));
        } else {
            status.push(Span::styled("0", styles::text_muted(self.palette)));
        }
        status.push(Span::raw("  "));
        status.push(Span::styled(theme_glyph, styles::rating(self.palette)));
        status.push(Span::raw("  "));
        status.push(Span::styled(
            "a:keranjang w:wish c:chat d:tema q:keluar",
            styles::text_muted(self.palette),
        ));

        let status_line = Line::from(status);
        let status_width = status_line.width() as u16;
        let title_width = UnicodeWidthStr::width(content::SHOP_NAME) as u16 + 4;
        if inner.width > title_width + status_width {
            let status_area = Rect {
                x: inner.x + inner.width - status_width,
                y: inner.y,
                width: status_width,
                height: 1,
            };
            status_line.render(status_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;
    use pustaka_app::IconMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(header: Header) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(header, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_shows_shop_name() {
        let header = Header::new(0, 0, Theme::Dark, &DARK, IconSet::new(IconMode::Unicode));
        let content_str = render_to_string(header);
        assert!(content_str.contains("Buku Inspirasi & Perjuangan"));
    }

    #[test]
    fn test_header_shows_cart_count() {
        let header = Header::new(3, 1, Theme::Dark, &DARK, IconSet::new(IconMode::Unicode));
        let content_str = render_to_string(header);
        assert!(content_str.contains(" 3 "));
    }

    #[test]
    fn test_header_survives_tiny_area() {
        let backend = TestBackend::new(4, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let header =
                    Header::new(0, 0, Theme::Dark, &DARK, IconSet::new(IconMode::Unicode));
                f.render_widget(header, f.area());
            })
            .unwrap();
    }
}
