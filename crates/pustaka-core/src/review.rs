//! Seeded text reviews and the review sort selector.

use chrono::NaiveDate;

/// A single reader review. Seed data only; reviews are never created or
/// mutated at runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    /// Star rating, 1–5.
    pub rating: u8,
    /// ISO date (`YYYY-MM-DD`).
    pub date: &'static str,
    pub text: &'static str,
}

impl Review {
    /// Parsed review date. Seed dates are well-formed; anything that is
    /// not sorts to the far past rather than panicking mid-render.
    pub fn parsed_date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
    }
}

/// Review ordering selected in the testimonials tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    /// Newest date first.
    #[default]
    Newest,
    /// Highest rating first.
    TopRated,
    /// Longest text first.
    // TODO: replace the text-length proxy with real helpfulness votes
    // once reviews carry them.
    MostHelpful,
}

impl ReviewSort {
    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "Terbaru",
            ReviewSort::TopRated => "Rating Tertinggi",
            ReviewSort::MostHelpful => "Paling Membantu",
        }
    }

    /// The next mode in selector order, wrapping.
    pub fn next(&self) -> Self {
        match self {
            ReviewSort::Newest => ReviewSort::TopRated,
            ReviewSort::TopRated => ReviewSort::MostHelpful,
            ReviewSort::MostHelpful => ReviewSort::Newest,
        }
    }
}

/// Seeded reviews, in submission order.
pub const REVIEWS: &[Review] = &[
    Review {
        name: "Nadia",
        rating: 5,
        date: "2025-01-10",
        text: "Luar biasa menyentuh. Setiap halaman memberi harapan.",
    },
    Review {
        name: "Rizky",
        rating: 4,
        date: "2025-02-02",
        text: "Sangat memotivasi, terutama kisah-kisah nyata yang jujur.",
    },
    Review {
        name: "Ayu",
        rating: 5,
        date: "2025-03-15",
        text: "Buku \u{201c}Titik Balik\u{201d} membantu saya konsisten refleksi harian.",
    },
];

/// Return the reviews in the order the given mode dictates.
///
/// The sort is stable: reviews that compare equal keep their input order.
pub fn sort_reviews<'a>(reviews: &'a [Review], mode: ReviewSort) -> Vec<&'a Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    match mode {
        ReviewSort::Newest => sorted.sort_by_key(|r| std::cmp::Reverse(r.parsed_date())),
        ReviewSort::TopRated => sorted.sort_by_key(|r| std::cmp::Reverse(r.rating)),
        ReviewSort::MostHelpful => sorted.sort_by_key(|r| std::cmp::Reverse(r.text.len())),
    }
    sorted
}
