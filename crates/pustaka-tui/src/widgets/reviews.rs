//! Testimonials section: video tab and sortable text reviews tab.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pustaka_app::TestimonialTab;
use pustaka_core::{content, review::sort_reviews, Review, ReviewSort, REVIEWS};

use crate::theme::{styles, IconSet, Palette};

pub struct Reviews<'a> {
    tab: TestimonialTab,
    sort: ReviewSort,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Reviews<'a> {
    pub fn new(
        tab: TestimonialTab,
        sort: ReviewSort,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            tab,
            sort,
            palette,
            icons,
        }
    }

    fn tab_bar(&self) -> Line<'static> {
        let (video_style, text_style) = match self.tab {
            TestimonialTab::Video => (
                styles::badge(self.palette),
                styles::text_secondary(self.palette),
            ),
            TestimonialTab::Text => (
                styles::text_secondary(self.palette),
                styles::badge(self.palette),
            ),
        };
        Line::from(vec![
            Span::styled(" [v] Video Testimoni ", video_style),
            Span::raw("  "),
            Span::styled(" [t] Ulasan Teks ", text_style),
        ])
    }

    fn stars(&self, rating: u8) -> String {
        let mut out = String::new();
        for i in 0..5 {
            out.push_str(if i < rating {
                self.icons.star_filled()
            } else {
                self.icons.star_empty()
            });
        }
        out
    }

    fn review_lines(&self, review: &Review) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(
                    review.name.to_string(),
                    styles::heading(self.palette),
                ),
                Span::raw("  "),
                Span::styled(self.stars(review.rating), styles::rating(self.palette)),
                Span::raw("  "),
                Span::styled(review.date.to_string(), styles::text_muted(self.palette)),
            ]),
            Line::from(Span::styled(
                review.text.to_string(),
                styles::text_primary(self.palette),
            )),
            Line::default(),
        ]
    }
}

impl Widget for Reviews<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false).title(Span::styled(
            " Testimoni ",
            styles::heading(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        self.tab_bar().render(Rect { height: 1, ..inner }, buf);

        let body = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        if body.height == 0 {
            return;
        }

        match self.tab {
            TestimonialTab::Video => {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Tonton testimoni pembaca:",
                        styles::text_primary(self.palette),
                    )),
                    Line::from(Span::styled(
                        content::VIDEO_TESTIMONIAL_URL,
                        styles::accent(self.palette),
                    )),
                ])
                .wrap(Wrap { trim: true })
                .render(body, buf);
            }
            TestimonialTab::Text => {
                let mut lines = vec![Line::from(vec![
                    Span::styled("Sort by: ", styles::text_secondary(self.palette)),
                    Span::styled(self.sort.label(), styles::accent_bold(self.palette)),
                    Span::styled("  [s] ganti urutan", styles::text_muted(self.palette)),
                ])];
                for review in sort_reviews(REVIEWS, self.sort) {
                    lines.extend(self.review_lines(review));
                }
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(body, buf);
            }
        }
    }
}
