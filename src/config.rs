//! Client configuration.
//!
//! Buffer capacities are compile-time constants; the request text the client
//! emits and the transport timeouts are runtime [`Config`] values that can
//! also be read from a JSON document without allocating.

use core::time::Duration;

use serde::Deserialize;

use crate::network::error::Error;

/// Default capacity of a response buffer.
///
/// The whole header block of a response must fit in one buffer; a larger
/// one is reported as [`Error::InvalidResponse`].
pub const RESPONSE_BUFFER_LEN: usize = 8192;

/// Capacity of the buffer a request is formatted into.
pub const REQUEST_BUFFER_LEN: usize = 4096;

/// Protocol version written on the request line.
///
/// HTTP/1.0 keeps servers from answering with chunked or compressed
/// transfer codings this client does not decode.
pub const PROTOCOL: &str = "HTTP/1.0";

/// Default `User-Agent` header value.
pub const USER_AGENT: &str = concat!("libhttp/", env!("CARGO_PKG_VERSION"));

/// Runtime options for a [`Client`](crate::network::application::http::Client)
/// and its transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config<'a> {
    /// `User-Agent` sent by the simple request helpers.
    pub user_agent: &'a str,
    /// Protocol version written on the request line.
    pub protocol: &'a str,
    /// Per-address connect timeout, in milliseconds.
    pub connect_timeout_ms: Option<u32>,
    /// Per-read timeout, in milliseconds.
    pub read_timeout_ms: Option<u32>,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT,
            protocol: PROTOCOL,
            connect_timeout_ms: None,
            read_timeout_ms: None,
        }
    }
}

impl<'a> Config<'a> {
    /// Parses a configuration from JSON. Missing fields keep their defaults.
    ///
    /// ```
    /// use libhttp::config::Config;
    ///
    /// let config = Config::from_json(br#"{"user_agent":"fetch/2","read_timeout_ms":500}"#).unwrap();
    /// assert_eq!(config.user_agent, "fetch/2");
    /// assert_eq!(config.protocol, "HTTP/1.0");
    /// ```
    pub fn from_json(json: &'a [u8]) -> Result<Self, Error> {
        let (config, _) = serde_json_core::from_slice::<Config<'a>>(json).map_err(|_err| {
            tracing::debug!("rejected client configuration");
            Error::InvalidArgument
        })?;
        Ok(config)
    }

    /// The connect timeout, if one is set and non-zero.
    pub fn connect_timeout(&self) -> Option<Duration> {
        millis(self.connect_timeout_ms)
    }

    /// The read timeout, if one is set and non-zero.
    pub fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }
}

fn millis(ms: Option<u32>) -> Option<Duration> {
    ms.filter(|&ms| ms > 0)
        .map(|ms| Duration::from_millis(u64::from(ms)))
}
