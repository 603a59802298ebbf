//! Product grid: one card per catalog title.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::{format_idr, Book, Wishlist, CATALOG};

use crate::theme::{styles, IconSet, Palette};

/// The three-card product grid with a focus highlight.
pub struct Products<'a> {
    selected: usize,
    wishlist: &'a Wishlist,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Products<'a> {
    pub fn new(
        selected: usize,
        wishlist: &'a Wishlist,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            selected,
            wishlist,
            palette,
            icons,
        }
    }

    fn render_card(&self, book: &'static Book, focused: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let heart = if self.wishlist.contains(book.id) {
            Span::styled(self.icons.heart_filled(), styles::accent(self.palette))
        } else {
            Span::styled(
                self.icons.heart_outline(),
                styles::text_muted(self.palette),
            )
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(book.title, styles::heading(self.palette)),
                Span::raw(" "),
                heart,
            ]),
            Line::from(Span::styled(
                book.author,
                styles::text_secondary(self.palette),
            )),
            Line::from(Span::styled(book.tagline, styles::accent(self.palette))),
        ];
        for feature in book.features {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.check()),
                    styles::success(self.palette),
                ),
                Span::styled(*feature, styles::text_primary(self.palette)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format_idr(book.price_idr),
                styles::heading(self.palette),
            ),
            Span::raw("  "),
            if focused {
                Span::styled(
                    format!("[a] Tambah ke Keranjang {}", self.icons.cart()),
                    styles::accent_bold(self.palette),
                )
            } else {
                Span::raw("")
            },
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for Products<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false)
            .title(Span::styled(
                " Produk Utama ",
                styles::heading(self.palette),
            ))
            .title_bottom(Span::styled(
                " [x] bandingkan buku · [h/l] pilih ",
                styles::text_muted(self.palette),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, CATALOG.len() as u32);
            CATALOG.len()
        ])
        .split(inner);

        for (i, book) in CATALOG.iter().enumerate() {
            self.render_card(book, i == self.selected, columns[i], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;
    use pustaka_app::IconMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(wishlist: &Wishlist, selected: usize) -> String {
        let backend = TestBackend::new(150, 13);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let grid =
                    Products::new(selected, wishlist, &DARK, IconSet::new(IconMode::Unicode));
                f.render_widget(grid, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_grid_shows_every_title_and_price() {
        let wishlist = Wishlist::new();
        let content_str = render_to_string(&wishlist, 0);
        assert!(content_str.contains("Sebelum Aku Tiada"));
        assert!(content_str.contains("Melawan Kemustahilan"));
        assert!(content_str.contains("Titik Balik"));
        assert!(content_str.contains("Rp 89.000"));
    }

    #[test]
    fn test_focused_card_offers_add_action() {
        let wishlist = Wishlist::new();
        let content_str = render_to_string(&wishlist, 1);
        assert!(content_str.contains("Tambah ke Keranjang"));
    }

    #[test]
    fn test_wished_book_shows_filled_heart() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle("b1");
        let content_str = render_to_string(&wishlist, 0);
        assert!(content_str.contains('\u{2665}'));
    }
}
