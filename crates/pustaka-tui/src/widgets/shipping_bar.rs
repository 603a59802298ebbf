//! Free-shipping progress bar, pinned over the page bottom while the
//! cart is non-empty.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use pustaka_core::shipping;

use crate::theme::{styles, IconSet, Palette};

pub struct ShippingBar<'a> {
    cart_len: usize,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> ShippingBar<'a> {
    pub fn new(cart_len: usize, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            cart_len,
            palette,
            icons,
        }
    }

    fn message(&self) -> String {
        if shipping::qualifies(self.cart_len) {
            "Anda telah memenuhi syarat gratis ongkir!".to_string()
        } else {
            format!(
                "Tambah {} buku lagi untuk Gratis Ongkir!",
                shipping::remaining(self.cart_len)
            )
        }
    }
}

impl Widget for ShippingBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let progress = shipping::progress(self.cart_len);

        let text_area = Rect { height: 1, ..inner };
        Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.truck()),
                styles::accent(self.palette),
            ),
            Span::styled(self.message(), styles::text_primary(self.palette)),
            Span::raw("  "),
            Span::styled(format!("{progress}%"), styles::accent_bold(self.palette)),
        ])
        .render(text_area, buf);

        let gauge_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        Gauge::default()
            .ratio(f64::from(progress) / 100.0)
            .gauge_style(styles::accent(self.palette))
            .label("")
            .render(gauge_area, buf);
    }
}
