//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Quote store errors
///
/// Not-found is not an error here: `delete` reports it as `false` and
/// `random` as `None`. The only failure mode is a lock poisoned by a
/// panicking writer.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Lock poisoned")]
    LockPoisoned,
}
