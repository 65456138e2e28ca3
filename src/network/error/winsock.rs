//! Windows Sockets (`WSAGetLastError`) translation.
//!
//! The WSA codes are fixed numbers, so the table compiles and is tested on
//! every target, not only on Windows.

use super::{Error, ErrorSpace};

const WSA_NOT_ENOUGH_MEMORY: i32 = 8;
const WSAEINTR: i32 = 10004;
const WSAEACCES: i32 = 10013;
const WSAEFAULT: i32 = 10014;
const WSAEINVAL: i32 = 10022;
const WSAEMFILE: i32 = 10024;
const WSAEWOULDBLOCK: i32 = 10035;
const WSAEINPROGRESS: i32 = 10036;
const WSAEALREADY: i32 = 10037;
const WSAENOTSOCK: i32 = 10038;
const WSAEMSGSIZE: i32 = 10040;
const WSAEPROTOTYPE: i32 = 10041;
const WSAEPROTONOSUPPORT: i32 = 10043;
const WSAESOCKTNOSUPPORT: i32 = 10044;
const WSAEOPNOTSUPP: i32 = 10045;
const WSAEAFNOSUPPORT: i32 = 10047;
const WSAEADDRINUSE: i32 = 10048;
const WSAEADDRNOTAVAIL: i32 = 10049;
const WSAENETDOWN: i32 = 10050;
const WSAENETUNREACH: i32 = 10051;
const WSAENETRESET: i32 = 10052;
const WSAECONNABORTED: i32 = 10053;
const WSAECONNRESET: i32 = 10054;
const WSAENOBUFS: i32 = 10055;
const WSAEISCONN: i32 = 10056;
const WSAENOTCONN: i32 = 10057;
const WSAESHUTDOWN: i32 = 10058;
const WSAETIMEDOUT: i32 = 10060;
const WSAECONNREFUSED: i32 = 10061;
const WSAEHOSTUNREACH: i32 = 10065;
const WSAEPROCLIM: i32 = 10067;
const WSASYSNOTREADY: i32 = 10091;
const WSAVERNOTSUPPORTED: i32 = 10092;
const WSANOTINITIALISED: i32 = 10093;
const WSAEINVALIDPROCTABLE: i32 = 10104;
const WSAEINVALIDPROVIDER: i32 = 10105;
const WSAEPROVIDERFAILEDINIT: i32 = 10106;
const WSATYPE_NOT_FOUND: i32 = 10109;
const WSAHOST_NOT_FOUND: i32 = 11001;
const WSATRY_AGAIN: i32 = 11002;
const WSANO_RECOVERY: i32 = 11003;
const WSANO_DATA: i32 = 11004;

/// The Windows Sockets error space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winsock;

impl ErrorSpace for Winsock {
    fn translate(code: i32) -> Error {
        match code {
            WSAEACCES => Error::PermissionDenied,
            WSAEHOSTUNREACH => Error::HostUnreachable,
            WSAENETUNREACH => Error::NetUnreachable,
            WSA_NOT_ENOUGH_MEMORY | WSAENOBUFS => Error::OutOfMemory,
            WSAEAFNOSUPPORT
            | WSAEOPNOTSUPP
            | WSAEPROTONOSUPPORT
            | WSAESOCKTNOSUPPORT
            | WSAVERNOTSUPPORTED => Error::Unsupported,
            WSAETIMEDOUT => Error::Timeout,
            WSAECONNABORTED => Error::ConnAborted,
            WSAECONNREFUSED => Error::ConnRefused,
            WSAENETRESET | WSAECONNRESET => Error::ConnReset,
            WSAEINVALIDPROCTABLE | WSAEFAULT => Error::BadMemAddress,
            WSAEPROTOTYPE | WSAEINVAL => Error::InvalidArgument,
            WSAENETDOWN => Error::NetDown,
            WSAEPROCLIM | WSAEMFILE => Error::TooManyConns,
            WSAENOTCONN => Error::NotConnected,
            WSAHOST_NOT_FOUND | WSATRY_AGAIN | WSANO_RECOVERY | WSANO_DATA => Error::DnsFail,
            // Known codes still without a dedicated kind.
            WSAEADDRINUSE
            | WSAEADDRNOTAVAIL
            | WSAEALREADY
            | WSAEINPROGRESS
            | WSAEINTR
            | WSAEISCONN
            | WSAEMSGSIZE
            | WSAENOTSOCK
            | WSAEPROVIDERFAILEDINIT
            | WSAESHUTDOWN
            | WSAEWOULDBLOCK
            | WSANOTINITIALISED
            | WSASYSNOTREADY
            | WSATYPE_NOT_FOUND
            | WSAEINVALIDPROVIDER => Error::Unknown,
            _ => Error::Unknown,
        }
    }
}
