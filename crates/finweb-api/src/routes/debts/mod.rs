//! Own-debt routes - debts owed to creditors
//!
//! Structure:
//! - page.rs: Full page rendering

pub mod page;

pub use page::page_debts;
