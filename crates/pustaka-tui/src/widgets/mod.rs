//! Widgets for the storefront TUI, one module per page section.

pub mod chat;
pub mod compare;
pub mod cta;
pub mod faq;
pub mod footer;
pub mod header;
pub mod hero;
pub mod problems;
pub mod products;
pub mod reviews;
pub mod shipping_bar;
pub mod social_proof;

pub use chat::ChatWindow;
pub use compare::CompareModal;
pub use cta::CtaBanner;
pub use faq::Faq;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use problems::Problems;
pub use products::Products;
pub use reviews::Reviews;
pub use shipping_bar::ShippingBar;
pub use social_proof::SocialProof;
