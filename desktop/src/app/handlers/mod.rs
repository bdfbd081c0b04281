//! # Event Handlers
//!
//! User action handlers organized by domain. Each takes the shared state and
//! holds the write lock only for the state transition itself.

pub mod navigation;
pub mod query;
