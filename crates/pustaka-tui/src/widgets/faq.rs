//! FAQ section rendered as the single-open accordion.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::{Accordion, FAQ_ITEMS};

use crate::theme::{styles, IconSet, Palette};

pub struct Faq<'a> {
    accordion: &'a Accordion,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Faq<'a> {
    pub fn new(accordion: &'a Accordion, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            accordion,
            palette,
            icons,
        }
    }
}

impl Widget for Faq<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false)
            .title(Span::styled(
                " Pertanyaan Umum ",
                styles::heading(self.palette),
            ))
            .title_bottom(Span::styled(
                " [1-4] buka/tutup ",
                styles::text_muted(self.palette),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for (i, item) in FAQ_ITEMS.iter().enumerate() {
            let open = self.accordion.is_open(i);
            let chevron = if open {
                self.icons.chevron_up()
            } else {
                self.icons.chevron_down()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::text_muted(self.palette)),
                Span::styled(
                    item.question,
                    if open {
                        styles::accent_bold(self.palette)
                    } else {
                        styles::text_primary(self.palette)
                    },
                ),
                Span::raw(" "),
                Span::styled(chevron, styles::text_muted(self.palette)),
            ]));
            if open {
                lines.push(Line::from(Span::styled(
                    format!("  {}", item.answer),
                    styles::text_secondary(self.palette),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
