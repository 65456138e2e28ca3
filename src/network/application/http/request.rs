use core::fmt::Write as _;

use base64ct::{Base64, Encoding as _};
use heapless::{String, Vec};

use crate::config::PROTOCOL;
use crate::network::error::Error;

/// Maximum number of headers a request carries.
pub const MAX_HEADERS: usize = 16;
/// Maximum length of a header name.
pub const MAX_HEADER_NAME_LEN: usize = 64;
/// Maximum length of a header value.
pub const MAX_HEADER_VALUE_LEN: usize = 256;

const BASIC: &str = "Basic ";
// Largest `user:password` whose Base64 form still fits in a header value.
const MAX_CREDENTIALS_LEN: usize = (MAX_HEADER_VALUE_LEN - BASIC.len()) / 4 * 3;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// HEAD
    Head,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
}

impl Method {
    /// The method token as written on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// One request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name, written as given.
    pub name: String<MAX_HEADER_NAME_LEN>,
    /// Header value.
    pub value: String<MAX_HEADER_VALUE_LEN>,
}

impl Header {
    /// Copies `name` and `value` into a header, failing with
    /// [`Error::InvalidArgument`] if either is too long.
    pub fn new(name: &str, value: &str) -> Result<Self, Error> {
        Ok(Self {
            name: String::try_from(name).map_err(|()| Error::InvalidArgument)?,
            value: String::try_from(value).map_err(|()| Error::InvalidArgument)?,
        })
    }
}

/// An HTTP request described as plain data.
///
/// [`encode`](Request::encode) produces the exact bytes sent on the wire:
///
/// ```text
/// METHOD SP path SP protocol CRLF
/// (name: value CRLF)*
/// [Content-Length: n CRLF]
/// CRLF
/// body
/// ```
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// Request method.
    pub method: Method,
    /// Request target, usually an absolute path with optional query.
    pub path: &'a str,
    /// Protocol version for the request line.
    pub protocol: &'a str,
    /// Headers in the order they are sent.
    pub headers: Vec<Header, MAX_HEADERS>,
    /// Optional body, sent verbatim after the head.
    pub body: Option<&'a [u8]>,
}

impl<'a> Request<'a> {
    /// Starts building a request for `path`.
    pub fn builder(method: Method, path: &'a str) -> RequestBuilder<'a> {
        RequestBuilder::new(method, path)
    }

    /// Looks up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    /// Checks that the request line and headers cannot be split or extended
    /// by the text they carry.
    pub fn validate(&self) -> Result<(), Error> {
        if self.path.is_empty() || self.path.bytes().any(|b| b == b' ' || is_line_break(b)) {
            return Err(Error::InvalidArgument);
        }
        if self.protocol.is_empty() || self.protocol.bytes().any(|b| b == b' ' || is_line_break(b)) {
            return Err(Error::InvalidArgument);
        }
        for header in &self.headers {
            let name = header.name.as_bytes();
            if name.is_empty() || name.iter().any(|&b| b == b':' || b == b' ' || is_line_break(b)) {
                return Err(Error::InvalidArgument);
            }
            if header.value.bytes().any(is_line_break) {
                return Err(Error::InvalidArgument);
            }
        }
        Ok(())
    }

    /// Formats the request into a buffer of capacity `N`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the request does not
    /// [`validate`](Request::validate), and with [`Error::OutOfMemory`] if
    /// the formatted request exceeds `N` bytes.
    pub fn encode<const N: usize>(&self) -> Result<Vec<u8, N>, Error> {
        self.validate()?;

        let mut buf: Vec<u8, N> = Vec::new();

        // Request line
        push(&mut buf, self.method.as_str().as_bytes())?;
        push(&mut buf, b" ")?;
        push(&mut buf, self.path.as_bytes())?;
        push(&mut buf, b" ")?;
        push(&mut buf, self.protocol.as_bytes())?;
        push(&mut buf, b"\r\n")?;

        // Headers
        for header in &self.headers {
            push(&mut buf, header.name.as_bytes())?;
            push(&mut buf, b": ")?;
            push(&mut buf, header.value.as_bytes())?;
            push(&mut buf, b"\r\n")?;
        }

        // Body
        let body = self.body.unwrap_or_default();
        if !body.is_empty() && self.header("Content-Length").is_none() {
            let mut len: String<20> = String::new();
            write!(len, "{}", body.len()).map_err(|_| Error::OutOfMemory)?;
            push(&mut buf, b"Content-Length: ")?;
            push(&mut buf, len.as_bytes())?;
            push(&mut buf, b"\r\n")?;
        }
        push(&mut buf, b"\r\n")?;
        push(&mut buf, body)?;

        Ok(buf)
    }
}

/// Builder for [`Request`].
///
/// Setters never fail; the first problem (a header that does not fit, too
/// many headers) is kept and reported by [`build`](RequestBuilder::build).
///
/// ```
/// use libhttp::network::application::http::{Method, Request};
///
/// let request = Request::builder(Method::Post, "/events")
///     .header("Host", "example.com")
///     .body(b"{}")
///     .build()
///     .unwrap();
/// let bytes = request.encode::<256>().unwrap();
/// assert!(bytes.starts_with(b"POST /events HTTP/1.0\r\nHost: example.com\r\n"));
/// assert!(bytes.ends_with(b"Content-Length: 2\r\n\r\n{}"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    request: Request<'a>,
    error: Option<Error>,
}

impl<'a> RequestBuilder<'a> {
    /// A builder for an HTTP/1.0 request with no headers and no body.
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            request: Request {
                method,
                path,
                protocol: PROTOCOL,
                headers: Vec::new(),
                body: None,
            },
            error: None,
        }
    }

    /// Sets the protocol version written on the request line.
    pub fn protocol(mut self, protocol: &'a str) -> Self {
        self.request.protocol = protocol;
        self
    }

    /// Appends a header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        let pushed = Header::new(name, value).and_then(|header| {
            self.request
                .headers
                .push(header)
                .map_err(|_| Error::InvalidArgument)
        });
        self.record(pushed);
        self
    }

    /// Appends an `Authorization: Basic` header for `user` and `password`.
    pub fn basic_auth(mut self, user: &str, password: &str) -> Self {
        let value = basic_credentials(user, password);
        let pushed = value.and_then(|value| {
            self.request
                .headers
                .push(Header {
                    name: String::try_from("Authorization").map_err(|()| Error::InvalidArgument)?,
                    value,
                })
                .map_err(|_| Error::InvalidArgument)
        });
        self.record(pushed);
        self
    }

    /// Sets the body.
    pub fn body(mut self, body: &'a [u8]) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Finishes the request.
    pub fn build(self) -> Result<Request<'a>, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.request.validate()?;
        Ok(self.request)
    }

    fn record(&mut self, result: Result<(), Error>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

fn basic_credentials(user: &str, password: &str) -> Result<String<MAX_HEADER_VALUE_LEN>, Error> {
    let mut raw: Vec<u8, MAX_CREDENTIALS_LEN> = Vec::new();
    raw.extend_from_slice(user.as_bytes())
        .and_then(|()| raw.push(b':').map_err(|_| ()))
        .and_then(|()| raw.extend_from_slice(password.as_bytes()))
        .map_err(|()| Error::InvalidArgument)?;

    let mut encoded = [0u8; MAX_HEADER_VALUE_LEN];
    let text = Base64::encode(&raw, &mut encoded).map_err(|_| Error::InvalidArgument)?;

    let mut value: String<MAX_HEADER_VALUE_LEN> = String::new();
    value.push_str(BASIC).map_err(|()| Error::InvalidArgument)?;
    value.push_str(text).map_err(|()| Error::InvalidArgument)?;
    Ok(value)
}

fn push<const N: usize>(buf: &mut Vec<u8, N>, bytes: &[u8]) -> Result<(), Error> {
    buf.extend_from_slice(bytes).map_err(|()| Error::OutOfMemory)
}

fn is_line_break(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}
