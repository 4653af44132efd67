//! # Quote Store
//!
//! In-memory store owning the canonical quote collection and its
//! derived indexes. All mutation and multi-step reads pass through one
//! synchronization point.

pub mod errors;
pub mod quotes;

pub use errors::{StoreError, StoreResult};
pub use quotes::QuoteStore;
