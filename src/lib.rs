//! quotedb - a small, in-memory quote service over HTTP
//!
//! Create, read, and delete short text records ("quotes"), each with an
//! author and body. The core is the [`store::QuoteStore`]: three
//! synchronized views over one record set behind a single read/write
//! lock. Everything else is HTTP and CLI glue around it.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
