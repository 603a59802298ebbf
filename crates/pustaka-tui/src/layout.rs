//! Screen layout definitions for the TUI
//!
//! The storefront is one long page of fixed-height sections; the
//! viewport shows a window of them starting at the scrolled-to section.

use pustaka_app::Section;
use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed height (rows, borders included) of each page section.
pub fn section_height(section: Section) -> u16 {
    match section {
        Section::Hero => 9,
        Section::Problems => 10,
        Section::Products => 13,
        Section::SocialProof => 10,
        Section::CtaUrgency => 7,
        Section::Reviews => 15,
        Section::Faq => 11,
        Section::Footer => 12,
    }
}

/// Screen areas for the main layout
#[derive(Debug, Clone)]
pub struct ScreenAreas {
    /// Header bar (shop name, cart badge, keybindings)
    pub header: Rect,
    /// Visible page sections, top to bottom, paired with their Rect.
    /// The last one may be clipped by the bottom of the screen.
    pub sections: Vec<(Section, Rect)>,
}

/// Compute the visible window of sections for the current scroll position.
pub fn create(area: Rect, top_section: usize) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(3),    // Page body
    ])
    .split(area);

    let header = chunks[0];
    let body = chunks[1];

    let mut sections = Vec::new();
    let mut y = body.y;
    let bottom = body.y.saturating_add(body.height);

    for &section in Section::ALL.iter().skip(top_section) {
        if y >= bottom {
            break;
        }
        let wanted = section_height(section);
        let available = bottom - y;
        let rect = Rect {
            x: body.x,
            y,
            width: body.width,
            height: wanted.min(available),
        };
        sections.push((section, rect));
        y = y.saturating_add(wanted);
    }

    ScreenAreas { header, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_three_rows() {
        let areas = create(Rect::new(0, 0, 100, 40), 0);
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.header.y, 0);
    }

    #[test]
    fn test_sections_start_at_scroll_position() {
        let areas = create(Rect::new(0, 0, 100, 40), Section::Products.index());
        assert_eq!(areas.sections[0].0, Section::Products);
        assert_eq!(areas.sections[0].1.y, 3);
    }

    #[test]
    fn test_sections_fill_without_overlap() {
        let areas = create(Rect::new(0, 0, 100, 40), 0);
        let mut y = 3;
        for (section, rect) in &areas.sections {
            assert_eq!(rect.y, y, "section {section:?} misplaced");
            assert!(rect.height <= section_height(*section));
            y += section_height(*section);
        }
    }

    #[test]
    fn test_last_visible_section_is_clipped_not_dropped() {
        let areas = create(Rect::new(0, 0, 100, 20), 0);
        let last = areas.sections.last().unwrap();
        let body_bottom = 20;
        assert!(last.1.y < body_bottom);
        assert!(last.1.y + last.1.height <= body_bottom);
    }

    #[test]
    fn test_scrolled_to_bottom_shows_footer() {
        let last_index = Section::ALL.len() - 1;
        let areas = create(Rect::new(0, 0, 100, 30), last_index);
        assert_eq!(areas.sections.len(), 1);
        assert_eq!(areas.sections[0].0, Section::Footer);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let areas = create(Rect::new(0, 0, 10, 4), 0);
        assert!(areas.sections.len() <= 1);
    }
}
