//! Social proof: the rotating testimonial quote plus the stats row.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::content;

use crate::theme::{styles, IconSet, Palette};

pub struct SocialProof<'a> {
    quote_index: usize,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SocialProof<'a> {
    pub fn new(quote_index: usize, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            quote_index,
            palette,
            icons,
        }
    }
}

impl Widget for SocialProof<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false).title(Span::styled(
            " Dibaca dan Dicintai oleh Ribuan Pembaca ",
            styles::heading(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(3), // rotating quote
            Constraint::Length(1), // carousel dots
            Constraint::Min(1),    // stats row
        ])
        .split(inner);

        let quote = &content::TESTIMONIALS[self.quote_index % content::TESTIMONIALS.len()];
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", quote.text),
                styles::text_primary(self.palette),
            )),
            Line::from(Span::styled(
                format!("\u{2014} {}", quote.name),
                styles::text_secondary(self.palette),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(rows[0], buf);

        let mut dots = Vec::new();
        for i in 0..content::TESTIMONIALS.len() {
            let active = i == self.quote_index % content::TESTIMONIALS.len();
            dots.push(Span::styled(
                if active {
                    self.icons.dot_active()
                } else {
                    self.icons.dot_inactive()
                },
                if active {
                    styles::accent(self.palette)
                } else {
                    styles::text_muted(self.palette)
                },
            ));
            dots.push(Span::raw(" "));
        }
        Line::from(dots).render(rows[1], buf);

        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, content::STATS.len() as u32);
            content::STATS.len()
        ])
        .split(rows[2]);
        for (stat, column) in content::STATS.iter().zip(columns.iter()) {
            Paragraph::new(vec![Line::from(vec![
                Span::styled(stat.value, styles::accent_bold(self.palette)),
                Span::raw(" "),
                Span::styled(stat.label, styles::text_secondary(self.palette)),
            ])])
            .render(*column, buf);
        }
    }
}
