//! Static marketing copy for the single-page storefront.
//!
//! Everything here is seed data: hero copy, the empathy prompts, social
//! proof, the urgency banner, footer columns, and the one embedded video
//! reference. Nothing is fetched or generated at runtime.

/// Hero carousel image references, rotated on a fixed period.
pub const HERO_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1519681393784-d120267933ba",
    "https://images.unsplash.com/photo-1512820790803-83ca734da794",
    "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f",
];

pub const HERO_HEADLINE: &str = "\u{201c}Baca Buku Ini, Ubah Hidupmu.\u{201d}";

pub const HERO_SUBCOPY: &str = "Temukan kekuatan dalam kata-kata. Tiga kisah nyata yang akan \
mengubah cara Anda melihat tantangan, harapan, dan kehidupan.";

pub const HERO_CTA: &str = "LIHAT SEMUA BUKU";

/// The "have you ever felt..." empathy prompts.
pub const PROBLEM_PROMPTS: &[&str] = &[
    "Terjebak dalam rutinitas tanpa arah?",
    "Merasa tidak punya kekuatan untuk berubah?",
    "Butuh inspirasi dari kisah nyata yang kuat?",
    "Ingin menemukan makna di balik penderitaan?",
];

pub const PROBLEMS_HEADING: &str = "\u{201c}Apakah Kamu Pernah Merasa...\u{201d}";

pub const PROBLEMS_CLOSER: &str =
    "Jika ya, kamu tidak sendiri. Dan jawabannya ada di halaman-halaman buku ini.";

/// A rotating social-proof quote.
#[derive(Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Buku \u{2018}Sebelum Aku Tiada\u{2019} membuat saya menangis\u{2026} tapi juga \
               memberi kekuatan baru.",
        name: "Rina, Mahasiswi UI",
    },
    Testimonial {
        text: "Saya baca \u{2018}Melawan Kemustahilan\u{2019} 3 kali. Setiap kali ada halangan, \
               saya buka lagi.",
        name: "Andi, Pengusaha Muda",
    },
    Testimonial {
        text: "\u{2018}Titik Balik\u{2019} jadi teman saya tiap pagi. Saya tulis refleksi \
               setiap hari.",
        name: "Siti, Guru SD",
    },
];

/// One stats tile under the testimonial carousel.
#[derive(Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Buku Terjual",
        value: "150.000+",
    },
    Stat {
        label: "Rating",
        value: "4.9/5",
    },
    Stat {
        label: "Pengiriman",
        value: "Seluruh Indonesia",
    },
    Stat {
        label: "Customer Service",
        value: "24 Jam",
    },
];

pub const CTA_HEADLINE: &str = "Jangan Tunda Lagi \u{2014} Transformasi Dimulai Hari Ini!";

pub const CTA_BODY: &str = "Setiap buku yang kamu beli tidak hanya mengubah hidupmu, tapi juga \
membantu sesama. Stok terbatas! Beberapa edisi sudah hampir habis.";

pub const CTA_BUTTON: &str = "BELI SEKARANG \u{2014} GRATIS ONGKIR UNTUK PEMBELIAN 2+ BUKU!";

/// The one embedded third-party video, by fixed URL.
pub const VIDEO_TESTIMONIAL_URL: &str = "https://www.youtube.com/embed/1-1nJ3e23-8?rel=0";

pub const FOOTER_CUSTOMER_SERVICE: &[&str] = &[
    "FAQ",
    "Kebijakan Privasi",
    "Syarat & Ketentuan",
    "Retur & Pengembalian",
];

pub const FOOTER_SOCIALS: &[&str] = &["Instagram", "Facebook", "TikTok", "WhatsApp"];

pub const FOOTER_COPYRIGHT: &str =
    "\u{00a9} 2025 Buku Inspirasi & Perjuangan. All Rights Reserved.";

/// Shop name shown in the header.
pub const SHOP_NAME: &str = "Buku Inspirasi & Perjuangan";
