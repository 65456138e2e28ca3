//! # Application Layer Network Protocols
//!
//! Protocol clients written against the core network traits. Each works with
//! any type implementing [`Connection`](crate::network::Connection), uses
//! fixed-size buffers, and reports failures as
//! [`Error`](crate::network::error::Error).
//!
//! ## Available Protocols
//!
//! - **[`http`]**: blocking HTTP/1.0 request/response client

/// HTTP client implementation.
///
/// Provides a minimal HTTP/1.0 client with a fixed-size header buffer and a
/// pull-based body stream.
pub mod http;
