//! # QuoteDB HTTP Server Module
//!
//! Axum-based API server over the quote store.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /quotes` - All quotes, or `?author=` for one author's quotes
//! - `POST /quotes` - Create a quote
//! - `GET /quotes/random` - One uniformly random quote
//! - `DELETE /quotes/:id` - Delete by id

pub mod config;
pub mod quote_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use quote_routes::QuoteState;
pub use server::HttpServer;
