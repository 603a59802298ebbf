//! The static book catalog.
//!
//! The storefront sells exactly three titles. The catalog is seeded at
//! compile time and read-only for the process lifetime; every other part
//! of the system refers to it through `&'static Book` or a book id.

use crate::error::{Error, Result};

/// A single catalog item.
///
/// Prices are integer minor-unit rupiah (no decimals exist for IDR at
/// retail scale, so the minor unit is the rupiah itself).
#[derive(Debug, PartialEq, Eq)]
pub struct Book {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub price_idr: u64,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub image_url: &'static str,
}

/// The full catalog, in display order.
pub const CATALOG: &[Book] = &[
    Book {
        id: "b1",
        title: "Sebelum Aku Tiada",
        author: "Asma Nadia",
        price_idr: 89_000,
        tagline: "Surat-Surat dari Gaza — Kisah Haru yang Menggugah Jiwa",
        features: &[
            "100% Royalti untuk Palestina",
            "Kisah nyata dari anak-anak Gaza",
            "Dibaca oleh lebih dari 50.000 orang",
        ],
        image_url: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c",
    },
    Book {
        id: "b2",
        title: "Melawan Kemustahilan",
        author: "Dewa Eka Prayoga",
        price_idr: 75_000,
        tagline: "Menguji Keimanan, Menjemput Keajaiban",
        features: &[
            "Best Seller Edisi Revisi",
            "Kisah nyata perjuangan hidup",
            "Highly Recommended oleh para motivator",
        ],
        image_url: "https://images.unsplash.com/photo-1519681393784-d120267933ba",
    },
    Book {
        id: "b3",
        title: "Titik Balik",
        author: "Arafat",
        price_idr: 69_000,
        tagline: "Ada 365 Hari dalam Setahun, Manakah yang Akan Jadi Titik Balik Dirimu?",
        features: &[
            "Buku harian reflektif",
            "Cocok untuk pencari makna dan transformasi diri",
            "Desain cover estetik, cocok untuk koleksi",
        ],
        image_url: "https://images.unsplash.com/photo-1526318472351-c75fcf070305",
    },
];

/// Look up a catalog item by id.
pub fn find_book(id: &str) -> Result<&'static Book> {
    CATALOG
        .iter()
        .find(|b| b.id == id)
        .ok_or_else(|| Error::unknown_book(id))
}

/// Format a minor-unit rupiah amount the way the shop prints prices:
/// `Rp 89.000` (dot thousands separators, no decimals).
pub fn format_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_titles() {
        assert_eq!(CATALOG.len(), 3);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_book() {
        let book = find_book("b2").unwrap();
        assert_eq!(book.title, "Melawan Kemustahilan");
        assert_eq!(book.price_idr, 75_000);
    }

    #[test]
    fn test_find_book_unknown_id() {
        let err = find_book("b9").unwrap_err();
        assert!(err.to_string().contains("b9"));
    }

    #[test]
    fn test_format_idr_grouping() {
        assert_eq!(format_idr(0), "Rp 0");
        assert_eq!(format_idr(500), "Rp 500");
        assert_eq!(format_idr(69_000), "Rp 69.000");
        assert_eq!(format_idr(89_000), "Rp 89.000");
        assert_eq!(format_idr(1_234_567), "Rp 1.234.567");
    }
}
