//! Compare modal: the three titles side by side in a table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Clear, Row, Table, Widget},
};

use pustaka_core::{format_idr, CATALOG};

use crate::theme::{styles, Palette};

/// Centered modal rect over the page.
pub fn overlay_area(screen: Rect) -> Rect {
    let width = screen.width.saturating_mul(4) / 5;
    let height = (CATALOG.len() as u16 + 4).min(screen.height);
    let x = screen.x + (screen.width.saturating_sub(width)) / 2;
    let y = screen.y + (screen.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub struct CompareModal<'a> {
    palette: &'a Palette,
}

impl<'a> CompareModal<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for CompareModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = styles::card_block(self.palette, true)
            .title(Span::styled(
                " Perbandingan Buku ",
                styles::heading(self.palette),
            ))
            .title_bottom(Span::styled(
                " Esc tutup ",
                styles::text_muted(self.palette),
            ));

        let header = Row::new(vec!["Buku", "Tagline", "Fitur", "Harga"])
            .style(styles::text_secondary(self.palette));

        let rows: Vec<Row> = CATALOG
            .iter()
            .map(|book| {
                Row::new(vec![
                    book.title.to_string(),
                    book.tagline.to_string(),
                    book.features.join(" \u{2022} "),
                    format_idr(book.price_idr),
                ])
                .style(styles::text_primary(self.palette))
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Ratio(1, 5),
                Constraint::Ratio(2, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}
