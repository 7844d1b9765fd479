//! Route modules for the gateway
//!
//! All routes are organized into modules:
//! - dashboard: Dashboard page, stats JSON passthrough
//! - debtors: Debtors list
//! - debts: Own debts list
//! - movements: Financial movements list
//! - categories: Categories list
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - page.rs: Full page rendering
//! - api.rs: JSON endpoints (where the area has any)

pub mod categories;
pub mod dashboard;
pub mod debtors;
pub mod debts;
pub mod movements;
