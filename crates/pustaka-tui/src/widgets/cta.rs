//! Urgency CTA banner between social proof and the reviews.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::content;

use crate::theme::{styles, IconSet, Palette};

pub struct CtaBanner<'a> {
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> CtaBanner<'a> {
    pub fn new(palette: &'a Palette, icons: IconSet) -> Self {
        Self { palette, icons }
    }
}

impl Widget for CtaBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(vec![
            Line::from(Span::styled(
                content::CTA_HEADLINE,
                styles::accent_bold(self.palette),
            )),
            Line::from(Span::styled(
                content::CTA_BODY,
                styles::text_secondary(self.palette),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.cart()),
                    styles::accent(self.palette),
                ),
                Span::styled(content::CTA_BUTTON, styles::badge(self.palette)),
                Span::styled("  [b]", styles::text_muted(self.palette)),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;
    use pustaka_app::IconMode;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_banner_shows_urgency_copy() {
        let backend = TestBackend::new(120, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let banner = CtaBanner::new(&DARK, IconSet::new(IconMode::Unicode));
                f.render_widget(banner, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let content_str: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content_str.contains("Jangan Tunda Lagi"));
        assert!(content_str.contains("BELI SEKARANG"));
    }
}
