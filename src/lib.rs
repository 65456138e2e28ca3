//! # libhttp - minimal blocking HTTP/1.0 client
//!
//! Given a server name, a port and a request, `libhttp` opens a TCP
//! connection, sends the request, parses the status line and header block
//! into a fixed-size buffer, and hands the rest of the body out as a
//! pull-based byte stream. It is meant for the single synchronous request
//! (an analytics call, a health check) that does not justify a full HTTP
//! stack.
//!
//! ## Features
//!
//! - **HTTP/1.0 client**: connect, send, parse head, stream body
//! - **Fixed buffers**: the response head lives in a const-sized buffer and
//!   the formatted request in a `heapless` vector; the core does not allocate
//! - **One error taxonomy**: BSD `errno` and Winsock error codes, DNS
//!   failures and malformed responses all map onto one closed
//!   [`Error`](network::error::Error) set
//! - **Transfer-Encoding detection**: chunked and gzip bodies are flagged,
//!   never decoded
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libhttp::network::application::http::{Client, Method};
//! use libhttp::network::env::Environment;
//! use libhttp::network::tcp::TcpConnector;
//!
//! # fn main() -> Result<(), libhttp::network::error::Error> {
//! let env = Environment::start()?;
//! let mut client = Client::new(&env, TcpConnector::new());
//!
//! let mut response = client.simple_request(Method::Post, "example.com", 80, "/events", b"{\"id\":1}")?;
//! println!("status: {}", response.status_code());
//!
//! let mut buf = [0u8; 1024];
//! while response.recv_chunk(&mut buf)? != 0 {}
//! response.close()?;
//! env.stop()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform Support
//!
//! The parser, request builder, response stream and error taxonomy are
//! `no_std`. Any transport implementing [`network::Connect`] can drive the
//! client; the `std` feature adds [`network::tcp`].
//!
//! ## Optional Features
//!
//! - `std`: TCP transport over `std::net` and `std::io` interop (default)
//! - `defmt`: `defmt::Format` for the public error and flag types

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Client configuration and buffer sizes.
pub mod config;

/// Network abstraction layer, error taxonomy and the HTTP client.
pub mod network;

pub use network::application::http::{Client, Method, Request, Response, TransferEncoding};
pub use network::env::Environment;
pub use network::error::Error;
