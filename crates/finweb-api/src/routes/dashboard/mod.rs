//! Dashboard routes - aggregate figures, recent movements, charts
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: Stats JSON passthrough for the client refresh loop

pub mod api;
pub mod page;

pub use api::api_stats;
pub use page::page_dashboard;
