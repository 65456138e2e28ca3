//! BSD sockets (`errno`) translation.

use super::{Error, ErrorSpace};

/// The POSIX `errno` space reported by BSD sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Errno;

impl ErrorSpace for Errno {
    fn translate(code: i32) -> Error {
        match code {
            libc::EACCES | libc::EPERM => Error::PermissionDenied,
            libc::EHOSTUNREACH => Error::HostUnreachable,
            libc::ENETUNREACH => Error::NetUnreachable,
            libc::ENOMEM | libc::ENOBUFS => Error::OutOfMemory,
            libc::EAFNOSUPPORT
            | libc::EOPNOTSUPP
            | libc::EPROTONOSUPPORT
            | libc::ESOCKTNOSUPPORT => Error::Unsupported,
            // SO_RCVTIMEO expiry surfaces as EAGAIN on BSD sockets.
            libc::ETIMEDOUT | libc::EAGAIN => Error::Timeout,
            libc::ECONNABORTED => Error::ConnAborted,
            libc::ECONNREFUSED => Error::ConnRefused,
            libc::ENETRESET | libc::ECONNRESET | libc::EPIPE => Error::ConnReset,
            libc::EFAULT => Error::BadMemAddress,
            libc::EPROTOTYPE | libc::EINVAL => Error::InvalidArgument,
            libc::ENETDOWN => Error::NetDown,
            libc::EMFILE | libc::ENFILE => Error::TooManyConns,
            libc::ENOTCONN => Error::NotConnected,
            _ => Error::Unknown,
        }
    }
}
