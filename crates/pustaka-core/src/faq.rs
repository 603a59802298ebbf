//! FAQ items and the single-open accordion.

/// One question/answer pair.
#[derive(Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Seeded FAQ entries, in display order.
pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "Apakah buku ini tersedia dalam versi digital?",
        answer: "Belum, saat ini hanya versi fisik. Namun kami sedang mengembangkan versi ebook.",
    },
    FaqItem {
        question: "Bagaimana proses pengiriman?",
        answer: "Pengiriman via JNE/J&T Express, estimasi 2-5 hari kerja. Tracking nomor dikirim via email.",
    },
    FaqItem {
        question: "Apakah bisa retur?",
        answer: "Retur diterima jika buku rusak atau salah kirim. Hubungi CS dalam 3x24 jam setelah terima.",
    },
    FaqItem {
        question: "Apakah ada diskon untuk pembelian grosir?",
        answer: "Ya! Untuk pembelian 10+ buku, dapatkan diskon 15%. Hubungi WA kami.",
    },
];

/// Single-open accordion state machine.
///
/// Either fully closed or open at exactly one index. Toggling the open
/// index closes it; toggling any other index moves the opening there.
/// Lives for the page session; there is no terminal state.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
