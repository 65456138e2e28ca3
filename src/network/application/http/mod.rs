//! HTTP/1.0 client for blocking transports.
//!
//! This module provides a small request/response primitive: open a
//! connection, send one request, parse the response head into a fixed-size
//! buffer, and stream the body out of that buffer and then the connection.
//! It suits one-shot calls (an analytics ping, a status check) where a full
//! HTTP stack is unwanted.
//!
//! # Features
//!
//! - HTTP/1.0 requests, so servers frame the body by closing the connection
//! - Fixed-size response buffer; the header block must fit in it
//! - `Transfer-Encoding` detection (chunked, gzip) without decoding
//! - Pull-based body reads ending with a zero-length read
//! - Request builder that rejects header injection
//!
//! Keep-alive, redirects, TLS and content decoding are not provided.
//!
//! # Usage
//!
//! ```rust,no_run
//! use libhttp::network::application::http::Client;
//! use libhttp::network::env::Environment;
//! use libhttp::network::tcp::TcpConnector;
//!
//! # fn main() -> Result<(), libhttp::network::error::Error> {
//! let env = Environment::start()?;
//! let mut client = Client::new(&env, TcpConnector::new());
//!
//! let mut response = client.simple_get("example.com", 80, "/analytics?ID=11111")?;
//! if response.status_code() != 200 {
//!     // Something went wrong!
//! }
//!
//! let mut chunk = [0u8; 2048];
//! loop {
//!     let n = response.recv_chunk(&mut chunk)?;
//!     if n == 0 {
//!         break;
//!     }
//!     // use &chunk[..n]
//! }
//! response.close()?;
//! env.stop()?;
//! # Ok(())
//! # }
//! ```

/// Request engine.
pub mod client;

/// Transfer-coding flags.
pub mod encoding;

/// Response head parsing.
pub mod parser;

/// Request data and builder.
pub mod request;

/// Response and body stream.
pub mod response;

/// Byte scanning helpers.
pub mod scan;

pub use client::{Client, ResponseResult};
pub use encoding::TransferEncoding;
pub use request::{Header, Method, Request, RequestBuilder};
pub use response::Response;
