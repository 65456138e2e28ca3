//! Common error types for network operations
//!
//! Every fallible operation in this crate reports one [`Error`] kind. The
//! kinds form a closed set shared by all platforms; the native socket error
//! codes of each platform are folded onto it by an [`ErrorSpace`]
//! translator ([`Errno`] for BSD sockets, [`Winsock`] for Windows).

#[cfg(unix)]
mod errno;
mod winsock;

#[cfg(unix)]
pub use errno::Errno;
pub use winsock::Winsock;

/// The translator for the native error space of the compile target.
#[cfg(unix)]
pub type NativeErrors = Errno;

/// The translator for the native error space of the compile target.
#[cfg(windows)]
pub type NativeErrors = Winsock;

/// Numeric code reported for a successful operation.
pub const OK_CODE: i32 = 0;

/// A common error type for network operations.
///
/// This enum defines the request-lifecycle failures a caller can observe. It
/// carries no payload and is designed to be simple and portable for `no_std`
/// environments. Success is `Ok(_)`; its numeric view is [`OK_CODE`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(i32)]
pub enum Error {
    /// The platform does not support the requested socket feature.
    Unsupported = 1,
    /// A buffer or allocation could not hold the data.
    OutOfMemory = 2,
    /// The operating system refused the operation.
    PermissionDenied = 3,
    /// The server response was empty, malformed, or its header block did
    /// not fit in the response buffer.
    InvalidResponse = 4,
    /// The remote host actively refused the connection.
    ConnRefused = 5,
    /// The connection was aborted locally.
    ConnAborted = 6,
    /// The connection was reset by the peer.
    ConnReset = 7,
    /// No route to the remote host.
    HostUnreachable = 8,
    /// No route to the remote network.
    NetUnreachable = 9,
    /// The local network is down.
    NetDown = 10,
    /// A transport timeout expired.
    Timeout = 11,
    /// An invalid memory address was handed to the socket layer.
    BadMemAddress = 12,
    /// An argument was rejected, including malformed request text.
    InvalidArgument = 13,
    /// The process or system ran out of socket descriptors.
    TooManyConns = 14,
    /// The host name could not be resolved.
    DnsFail = 15,
    /// The connection was already closed after an earlier error.
    NotConnected = 16,
    /// A native error with no dedicated kind.
    Unknown = 5000,
}

impl Error {
    /// Returns the stable numeric code of this kind.
    ///
    /// [`Error::Unknown`] is numerically set apart from the rest so callers
    /// can spot gaps in the translation tables.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns a short static description of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Error::Unsupported => "operation not supported",
            Error::OutOfMemory => "out of memory",
            Error::PermissionDenied => "permission denied",
            Error::InvalidResponse => "invalid response",
            Error::ConnRefused => "connection refused",
            Error::ConnAborted => "connection aborted",
            Error::ConnReset => "connection reset",
            Error::HostUnreachable => "host unreachable",
            Error::NetUnreachable => "network unreachable",
            Error::NetDown => "network down",
            Error::Timeout => "timed out",
            Error::BadMemAddress => "bad memory address",
            Error::InvalidArgument => "invalid argument",
            Error::TooManyConns => "too many connections",
            Error::DnsFail => "dns resolution failed",
            Error::NotConnected => "not connected",
            Error::Unknown => "unknown error",
        }
    }
}

/// Returns the numeric code of a result: [`OK_CODE`] or the error's code.
pub fn code_of<T>(result: &Result<T, Error>) -> i32 {
    match result {
        Ok(_) => OK_CODE,
        Err(err) => err.code(),
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for Error {}

/// A native socket error space.
///
/// Each implementation is a total function from the platform's error codes
/// onto [`Error`]. Codes without a dedicated kind, including `0`, map to
/// [`Error::Unknown`]; a translator never reports success.
pub trait ErrorSpace {
    /// Maps one native error code to an [`Error`] kind.
    fn translate(code: i32) -> Error;

    /// Translates the calling thread's last OS error.
    #[cfg(feature = "std")]
    fn last_error() -> Error {
        match std::io::Error::last_os_error().raw_os_error() {
            Some(code) => Self::translate(code),
            None => Error::Unknown,
        }
    }
}

#[cfg(all(feature = "std", any(unix, windows)))]
fn translate_os(code: i32) -> Error {
    NativeErrors::translate(code)
}

#[cfg(all(feature = "std", not(any(unix, windows))))]
fn translate_os(_code: i32) -> Error {
    Error::Unknown
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        if let Some(code) = err.raw_os_error() {
            return translate_os(code);
        }
        match err.kind() {
            ErrorKind::PermissionDenied => Error::PermissionDenied,
            ErrorKind::ConnectionRefused => Error::ConnRefused,
            ErrorKind::ConnectionReset | ErrorKind::BrokenPipe => Error::ConnReset,
            ErrorKind::ConnectionAborted => Error::ConnAborted,
            ErrorKind::NotConnected => Error::NotConnected,
            ErrorKind::HostUnreachable => Error::HostUnreachable,
            ErrorKind::NetworkUnreachable => Error::NetUnreachable,
            ErrorKind::NetworkDown => Error::NetDown,
            ErrorKind::TimedOut | ErrorKind::WouldBlock => Error::Timeout,
            ErrorKind::InvalidInput => Error::InvalidArgument,
            ErrorKind::InvalidData => Error::InvalidResponse,
            ErrorKind::OutOfMemory => Error::OutOfMemory,
            ErrorKind::Unsupported => Error::Unsupported,
            _ => Error::Unknown,
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;

        let kind = match err {
            Error::Unsupported => ErrorKind::Unsupported,
            Error::OutOfMemory => ErrorKind::OutOfMemory,
            Error::PermissionDenied => ErrorKind::PermissionDenied,
            Error::InvalidResponse => ErrorKind::InvalidData,
            Error::ConnRefused => ErrorKind::ConnectionRefused,
            Error::ConnAborted => ErrorKind::ConnectionAborted,
            Error::ConnReset => ErrorKind::ConnectionReset,
            Error::HostUnreachable => ErrorKind::HostUnreachable,
            Error::NetUnreachable => ErrorKind::NetworkUnreachable,
            Error::NetDown => ErrorKind::NetworkDown,
            Error::Timeout => ErrorKind::TimedOut,
            Error::InvalidArgument | Error::BadMemAddress => ErrorKind::InvalidInput,
            Error::NotConnected => ErrorKind::NotConnected,
            Error::DnsFail | Error::TooManyConns | Error::Unknown => ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Unsupported => defmt::write!(f, "Unsupported"),
            Error::OutOfMemory => defmt::write!(f, "OutOfMemory"),
            Error::PermissionDenied => defmt::write!(f, "PermissionDenied"),
            Error::InvalidResponse => defmt::write!(f, "InvalidResponse"),
            Error::ConnRefused => defmt::write!(f, "ConnRefused"),
            Error::ConnAborted => defmt::write!(f, "ConnAborted"),
            Error::ConnReset => defmt::write!(f, "ConnReset"),
            Error::HostUnreachable => defmt::write!(f, "HostUnreachable"),
            Error::NetUnreachable => defmt::write!(f, "NetUnreachable"),
            Error::NetDown => defmt::write!(f, "NetDown"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::BadMemAddress => defmt::write!(f, "BadMemAddress"),
            Error::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Error::TooManyConns => defmt::write!(f, "TooManyConns"),
            Error::DnsFail => defmt::write!(f, "DnsFail"),
            Error::NotConnected => defmt::write!(f, "NotConnected"),
            Error::Unknown => defmt::write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_set_apart() {
        assert_eq!(Error::Unknown.code(), 5000);
        assert!(Error::NotConnected.code() < 100);
        assert_ne!(Error::Unsupported.code(), OK_CODE);
    }

    #[test]
    fn code_of_reports_success_as_zero() {
        let ok: Result<(), Error> = Ok(());
        let err: Result<(), Error> = Err(Error::DnsFail);
        assert_eq!(code_of(&ok), OK_CODE);
        assert_eq!(code_of(&err), Error::DnsFail.code());
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_kinds_without_os_code() {
        use std::io::{Error as IoError, ErrorKind};

        let timed_out = IoError::new(ErrorKind::TimedOut, "slow");
        assert_eq!(Error::from(timed_out), Error::Timeout);
        let refused = IoError::new(ErrorKind::ConnectionRefused, "nope");
        assert_eq!(Error::from(refused), Error::ConnRefused);
        let other = IoError::new(ErrorKind::Other, "?");
        assert_eq!(Error::from(other), Error::Unknown);
    }

    #[cfg(feature = "std")]
    #[test]
    fn converts_back_into_io_error() {
        let io: std::io::Error = Error::ConnReset.into();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionReset);
        assert_eq!(io.to_string(), "connection reset");
    }
}
