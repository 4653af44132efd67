//! # Quote Store
//!
//! Three views over the same record set, guarded as one unit:
//!
//! - an ordered sequence (insertion order; the `all` view and the
//!   random-selection population)
//! - an id map (existence checks and point deletion)
//! - an author map (secondary lookup, insertion order per author)
//!
//! After any completed operation the views contain exactly the same
//! records, and the per-author sequence is the subsequence of the
//! ordered sequence with that author, in the same relative order.

use std::collections::HashMap;
use std::sync::RwLock;

use rand::Rng;

use crate::model::{Quote, QuoteDraft};

use super::errors::{StoreError, StoreResult};

/// The three views plus the id counter. A single lock guards all of
/// them so partial updates are never observable.
#[derive(Debug)]
struct Indexes {
    quotes: Vec<Quote>,
    by_id: HashMap<u64, Quote>,
    by_author: HashMap<String, Vec<Quote>>,
    counter: u64,
}

/// Thread-safe quote store
///
/// Readers share the lock; `insert` and `delete` take it exclusively
/// for the full span of their index updates.
#[derive(Debug)]
pub struct QuoteStore {
    inner: RwLock<Indexes>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Indexes {
                quotes: Vec::new(),
                by_id: HashMap::new(),
                by_author: HashMap::new(),
                counter: 1,
            }),
        }
    }

    /// Insert a validated candidate, assigning the next id.
    ///
    /// Ids are strictly increasing in insertion order, starting at 1,
    /// and never reused even after deletion.
    pub fn insert(&self, draft: QuoteDraft) -> StoreResult<Quote> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let quote = Quote {
            id: inner.counter,
            author: draft.author,
            text: draft.text,
        };
        inner.counter += 1;

        inner.quotes.push(quote.clone());
        inner.by_id.insert(quote.id, quote.clone());
        inner
            .by_author
            .entry(quote.author.clone())
            .or_default()
            .push(quote.clone());

        Ok(quote)
    }

    /// All quotes in insertion order.
    ///
    /// Copied out; callers never hold a reference into the guarded
    /// state.
    pub fn all(&self) -> StoreResult<Vec<Quote>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(inner.quotes.clone())
    }

    /// The given author's quotes in insertion order.
    ///
    /// An unknown or empty author yields an empty vec, not an error.
    pub fn by_author(&self, author: &str) -> StoreResult<Vec<Quote>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(inner.by_author.get(author).cloned().unwrap_or_default())
    }

    /// One uniformly random quote, `None` when the store is empty.
    ///
    /// Each call is an independent draw; no state is retained between
    /// calls.
    pub fn random(&self) -> StoreResult<Option<Quote>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        if inner.quotes.is_empty() {
            return Ok(None);
        }

        let index = rand::thread_rng().gen_range(0..inner.quotes.len());
        Ok(inner.quotes.get(index).cloned())
    }

    /// Delete by id, removing the record from all three views under one
    /// write hold.
    ///
    /// Returns `false` when no such id exists, leaving every view
    /// untouched.
    pub fn delete(&self, id: u64) -> StoreResult<bool> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let quote = match inner.by_id.remove(&id) {
            Some(quote) => quote,
            None => return Ok(false),
        };

        // Index-based removal keeps insertion order for the remainder;
        // swap_remove would break the ordered views.
        if let Some(author_quotes) = inner.by_author.get_mut(&quote.author) {
            if let Some(pos) = author_quotes.iter().position(|q| q.id == id) {
                author_quotes.remove(pos);
            }
            if author_quotes.is_empty() {
                inner.by_author.remove(&quote.author);
            }
        }

        if let Some(pos) = inner.quotes.iter().position(|q| q.id == id) {
            inner.quotes.remove(pos);
        }

        Ok(true)
    }

    /// Number of stored quotes.
    pub fn len(&self) -> StoreResult<usize> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(inner.quotes.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}
