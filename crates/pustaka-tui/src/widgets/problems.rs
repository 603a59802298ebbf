//! The "have you ever felt..." empathy section.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_core::content;

use crate::theme::{styles, Palette};

pub struct Problems<'a> {
    palette: &'a Palette,
}

impl<'a> Problems<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for Problems<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                content::PROBLEMS_HEADING,
                styles::heading(self.palette),
            )),
            Line::default(),
        ];
        for prompt in content::PROBLEM_PROMPTS {
            lines.push(Line::from(vec![
                Span::styled("! ", styles::accent(self.palette)),
                Span::styled(*prompt, styles::text_primary(self.palette)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            content::PROBLEMS_CLOSER,
            styles::text_secondary(self.palette),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_problems_lists_all_prompts() {
        let backend = TestBackend::new(100, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(Problems::new(&DARK), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let content_str: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content_str.contains("Terjebak dalam rutinitas tanpa arah?"));
        assert!(content_str.contains("Ingin menemukan makna di balik penderitaan?"));
    }
}
