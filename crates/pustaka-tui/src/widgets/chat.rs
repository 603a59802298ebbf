//! Floating chat window (bottom-right overlay).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use pustaka_core::{ChatSender, ChatTranscript};

use crate::theme::{styles, IconSet, Palette};

/// Width of the floating window, clamped to the screen.
const CHAT_WIDTH: u16 = 44;
/// Height of the floating window, clamped to the screen.
const CHAT_HEIGHT: u16 = 14;

/// Compute the overlay rect anchored to the bottom-right corner.
pub fn overlay_area(screen: Rect) -> Rect {
    let width = CHAT_WIDTH.min(screen.width);
    let height = CHAT_HEIGHT.min(screen.height);
    Rect {
        x: screen.x + screen.width - width,
        y: screen.y + screen.height - height,
        width,
        height,
    }
}

pub struct ChatWindow<'a> {
    transcript: &'a ChatTranscript,
    input: &'a str,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> ChatWindow<'a> {
    pub fn new(
        transcript: &'a ChatTranscript,
        input: &'a str,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            transcript,
            input,
            palette,
            icons,
        }
    }
}

impl Widget for ChatWindow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = styles::card_block(self.palette, true)
            .title(Span::styled(
                format!(" {} Live Chat ", self.icons.chat()),
                styles::accent_bold(self.palette),
            ))
            .title_bottom(Span::styled(
                " Enter kirim · Esc tutup ",
                styles::text_muted(self.palette),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Min(1),    // transcript
            Constraint::Length(1), // input line
        ])
        .split(inner);

        // Show the newest lines that fit.
        let visible = rows[0].height as usize;
        let messages = self.transcript.messages();
        let start = messages.len().saturating_sub(visible);
        let mut lines = Vec::new();
        for message in &messages[start..] {
            let (prefix, style) = match message.sender {
                ChatSender::Bot => ("cs ", styles::text_secondary(self.palette)),
                ChatSender::Visitor => ("anda ", styles::accent(self.palette)),
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, styles::text_muted(self.palette)),
                Span::styled(message.text.clone(), style),
            ]));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(rows[0], buf);

        Line::from(vec![
            Span::styled("> ", styles::accent(self.palette)),
            Span::styled(
                format!("{}_", self.input),
                styles::text_primary(self.palette),
            ),
        ])
        .render(rows[1], buf);
    }
}
