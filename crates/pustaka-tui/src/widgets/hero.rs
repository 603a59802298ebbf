//! Hero section: rotating backdrop carousel, headline and CTA.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::content;

use crate::theme::{styles, IconSet, Palette};

/// Hero banner with the image carousel position indicator.
pub struct Hero<'a> {
    frame_index: usize,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Hero<'a> {
    pub fn new(frame_index: usize, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            frame_index,
            palette,
            icons,
        }
    }

    /// Carousel position dots, one per backdrop image.
    fn dots(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, _) in content::HERO_IMAGES.iter().enumerate() {
            let glyph = if i == self.frame_index % content::HERO_IMAGES.len() {
                self.icons.dot_active()
            } else {
                self.icons.dot_inactive()
            };
            let style = if i == self.frame_index % content::HERO_IMAGES.len() {
                styles::accent(self.palette)
            } else {
                styles::text_muted(self.palette)
            };
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let frame = content::HERO_IMAGES[self.frame_index % content::HERO_IMAGES.len()];
        let lines = vec![
            Line::from(Span::styled(
                content::HERO_HEADLINE,
                styles::heading(self.palette),
            )),
            Line::from(Span::styled(
                content::HERO_SUBCOPY,
                styles::text_secondary(self.palette),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("backdrop: ", styles::text_muted(self.palette)),
                Span::styled(frame, styles::text_muted(self.palette)),
            ]),
            self.dots(),
            Line::from(vec![
                Span::styled(self.icons.book(), styles::accent(self.palette)),
                Span::raw(" "),
                Span::styled(content::HERO_CTA, styles::accent_bold(self.palette)),
                Span::raw(" "),
                Span::styled(self.icons.arrow_right(), styles::accent(self.palette)),
                Span::styled("  [b]", styles::text_muted(self.palette)),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
