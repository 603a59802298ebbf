//! Page footer: info columns plus the newsletter signup form.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_app::{NewsletterState, NewsletterStatus};
use pustaka_core::content;

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    newsletter: &'a NewsletterState,
    form_focused: bool,
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(newsletter: &'a NewsletterState, form_focused: bool, palette: &'a Palette) -> Self {
        Self {
            newsletter,
            form_focused,
            palette,
        }
    }

    fn newsletter_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "Newsletter",
            styles::heading(self.palette),
        ))];

        let input = if self.form_focused {
            format!("{}_", self.newsletter.input)
        } else if self.newsletter.input.is_empty() {
            "Masukkan email  [n]".to_string()
        } else {
            self.newsletter.input.clone()
        };
        lines.push(Line::from(Span::styled(
            input,
            if self.form_focused {
                styles::text_primary(self.palette)
            } else {
                styles::text_muted(self.palette)
            },
        )));

        let status = match self.newsletter.status {
            NewsletterStatus::Idle => Span::styled(
                "Berlangganan",
                styles::accent(self.palette),
            ),
            NewsletterStatus::Subscribed => Span::styled(
                "Terima kasih sudah berlangganan!",
                styles::success(self.palette),
            ),
            NewsletterStatus::Invalid => Span::styled(
                "Alamat email tidak valid",
                styles::rating(self.palette),
            ),
        };
        lines.push(Line::from(status));
        lines
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, self.form_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Min(1),    // columns
            Constraint::Length(1), // copyright
        ])
        .split(inner);

        let columns = Layout::horizontal([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);

        let mut about = vec![Line::from(Span::styled(
            "Tentang Kami",
            styles::heading(self.palette),
        ))];
        about.push(Line::from(Span::styled(
            "Visi misi, sejarah, dan nilai-nilai perusahaan.",
            styles::text_secondary(self.palette),
        )));
        Paragraph::new(about)
            .wrap(Wrap { trim: true })
            .render(columns[0], buf);

        let mut service = vec![Line::from(Span::styled(
            "Layanan Pelanggan",
            styles::heading(self.palette),
        ))];
        for item in content::FOOTER_CUSTOMER_SERVICE {
            service.push(Line::from(Span::styled(
                *item,
                styles::text_secondary(self.palette),
            )));
        }
        Paragraph::new(service).render(columns[1], buf);

        let mut socials = vec![Line::from(Span::styled(
            "Ikuti Kami",
            styles::heading(self.palette),
        ))];
        for social in content::FOOTER_SOCIALS {
            socials.push(Line::from(Span::styled(
                *social,
                styles::accent(self.palette),
            )));
        }
        Paragraph::new(socials).render(columns[2], buf);

        Paragraph::new(self.newsletter_lines())
            .wrap(Wrap { trim: true })
            .render(columns[3], buf);

        Line::from(Span::styled(
            content::FOOTER_COPYRIGHT,
            styles::text_muted(self.palette),
        ))
        .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(newsletter: &NewsletterState, focused: bool) -> String {
        let backend = TestBackend::new(160, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let footer = Footer::new(newsletter, focused, &DARK);
                f.render_widget(footer, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_footer_shows_columns_and_copyright() {
        let newsletter = NewsletterState::new();
        let content_str = render_to_string(&newsletter, false);
        assert!(content_str.contains("Tentang Kami"));
        assert!(content_str.contains("Layanan Pelanggan"));
        assert!(content_str.contains("Kebijakan Privasi"));
        assert!(content_str.contains("All Rights Reserved."));
    }

    #[test]
    fn test_newsletter_acknowledgment_is_local_only() {
        let mut newsletter = NewsletterState::new();
        for ch in "pembaca@example.com".chars() {
            newsletter.push_char(ch);
        }
        newsletter.submit();
        let content_str = render_to_string(&newsletter, false);
        assert!(content_str.contains("Terima kasih sudah berlangganan!"));
    }

    #[test]
    fn test_invalid_submission_shows_validation_message() {
        let mut newsletter = NewsletterState::new();
        newsletter.push_char('x');
        newsletter.submit();
        let content_str = render_to_string(&newsletter, false);
        assert!(content_str.contains("tidak valid"));
    }

    #[test]
    fn test_focused_form_shows_cursor() {
        let mut newsletter = NewsletterState::new();
        newsletter.push_char('a');
        let content_str = render_to_string(&newsletter, true);
        assert!(content_str.contains("a_"));
    }
}
