//! A network abstraction layer for the HTTP client
//!
//! This module provides the transport traits the client is written against,
//! the error taxonomy every operation reports, and the process-wide socket
//! [`Environment`](env::Environment). A `std` TCP transport lives in [`tcp`].
//!
//! Transport errors are associated types so an implementation can keep its
//! own error type, but each must convert into the shared
//! [`Error`](error::Error).

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Process-wide socket subsystem lifecycle
pub mod env;

/// Application layer protocol clients
pub mod application;

/// Blocking TCP transport over `std::net`
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

// Core synchronous traits

/// The receiving half of a connection.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Read data from the connection.
    ///
    /// `Ok(0)` on a non-empty `buf` is an orderly end of stream: the peer
    /// closed its side.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// The sending half of a connection.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Releases a connection.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Resolve `host` and open a connection to `port` on it.
    ///
    /// A name that cannot be resolved is reported as
    /// [`Error::DnsFail`](error::Error::DnsFail), whatever the resolver's
    /// own error was.
    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error>;
}
