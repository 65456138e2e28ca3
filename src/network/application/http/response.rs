use core::fmt;

use super::encoding::TransferEncoding;
use super::parser::{ParseError, parse_head};
use crate::config::RESPONSE_BUFFER_LEN;
use crate::network::error::Error;
use crate::network::{Close, Connection, Read, Write};

/// The response to one request, and the connection it arrives on.
///
/// The head is read into a fixed buffer of `N` bytes, which must hold the
/// whole status line and header block. Body bytes that arrived in the same
/// reads stay in the buffer and are handed out by
/// [`recv_chunk`](Response::recv_chunk) before the connection is read again.
///
/// A `Response` owns its connection exclusively. It may be sent to another
/// thread, but concurrent use needs external synchronization.
pub struct Response<C: Connection, const N: usize = RESPONSE_BUFFER_LEN> {
    status_code: i32,
    transfer_encodings: TransferEncoding,
    buffer: [u8; N],
    bytes_in_buffer: usize,
    buffer_offset: usize,
    connection: Option<C>,
}

impl<C: Connection, const N: usize> Response<C, N> {
    /// Wraps a connection on which a request has been sent.
    ///
    /// The status code is `-1` until [`read_head`](Response::read_head)
    /// succeeds.
    pub fn new(connection: C) -> Self {
        Self {
            status_code: -1,
            transfer_encodings: TransferEncoding::NORMAL,
            buffer: [0; N],
            bytes_in_buffer: 0,
            buffer_offset: 0,
            connection: Some(connection),
        }
    }

    /// The response status code, or `-1` if no status line was parsed.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Transfer codings declared by the server.
    pub fn transfer_encodings(&self) -> TransferEncoding {
        self.transfer_encodings
    }

    /// Body bytes already received but not yet returned by
    /// [`recv_chunk`](Response::recv_chunk).
    pub fn buffered(&self) -> &[u8] {
        &self.buffer[self.buffer_offset..self.bytes_in_buffer]
    }

    /// Returns whether the connection is still open.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Reads and parses the response head.
    ///
    /// Receives into the buffer until the blank line that ends the head has
    /// arrived. Fails with [`Error::InvalidResponse`] if the server sends
    /// nothing, closes before the head is complete, sends a status line
    /// without a status code, or sends a head larger than `N` bytes.
    ///
    /// On any failure the buffer is emptied and the connection closed, so
    /// no header bytes are ever handed out as body.
    pub fn read_head(&mut self) -> Result<(), Error> {
        self.bytes_in_buffer = 0;
        self.buffer_offset = 0;

        self.receive_head().inspect_err(|_| {
            self.bytes_in_buffer = 0;
            self.buffer_offset = 0;
            discard(&mut self.connection);
        })
    }

    fn receive_head(&mut self) -> Result<(), Error> {
        loop {
            if self.bytes_in_buffer == N {
                tracing::warn!(capacity = N, "response head does not fit in the buffer");
                return Err(ParseError::HeadersTooLarge.into());
            }

            let n = read_from(&mut self.connection, &mut self.buffer[self.bytes_in_buffer..])?;
            if n == 0 {
                let err = if self.bytes_in_buffer == 0 {
                    ParseError::Empty
                } else {
                    ParseError::Incomplete
                };
                tracing::debug!(error = ?err, "connection closed before the response head ended");
                return Err(err.into());
            }
            self.bytes_in_buffer += n;

            match parse_head(&self.buffer[..self.bytes_in_buffer]) {
                Ok(head) => {
                    self.status_code = head.status_code;
                    self.transfer_encodings = head.transfer_encodings;
                    self.buffer_offset = head.body_start;
                    tracing::debug!(
                        status = head.status_code,
                        encodings = head.transfer_encodings.bits(),
                        buffered = self.bytes_in_buffer - head.body_start,
                        "response head parsed"
                    );
                    return Ok(());
                }
                Err(ParseError::Incomplete) => {}
                Err(err) => {
                    tracing::debug!(error = ?err, "malformed response head");
                    return Err(err.into());
                }
            }
        }
    }

    /// Reads the next piece of the body into `out`.
    ///
    /// Buffered body bytes are returned first, without touching the
    /// connection. After that each call is one read from the connection.
    /// `Ok(0)` for a non-empty `out` means the server closed the connection
    /// and the body is complete. A failed read closes the connection.
    pub fn recv_chunk(&mut self, out: &mut [u8]) -> Result<usize, Error> {
        if self.buffer_offset < self.bytes_in_buffer {
            let n = out.len().min(self.bytes_in_buffer - self.buffer_offset);
            out[..n].copy_from_slice(&self.buffer[self.buffer_offset..self.buffer_offset + n]);
            self.buffer_offset += n;
            tracing::trace!(bytes = n, "body chunk from buffer");
            return Ok(n);
        }

        let n = read_from(&mut self.connection, out)?;
        tracing::trace!(bytes = n, "body chunk from connection");
        Ok(n)
    }

    /// Closes the connection.
    ///
    /// Succeeds without doing anything if an earlier transport error already
    /// closed it.
    pub fn close(mut self) -> Result<(), Error> {
        match self.connection.take() {
            Some(connection) => connection.close().map_err(Into::<Error>::into),
            None => Ok(()),
        }
    }

    /// Writes all of `bytes` and flushes. A failed write closes the
    /// connection.
    pub(crate) fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let connection = self.connection.as_mut().ok_or(Error::NotConnected)?;
        let result = write_all(connection, bytes);
        if result.is_err() {
            discard(&mut self.connection);
        }
        result
    }
}

fn write_all<W: Write>(connection: &mut W, mut bytes: &[u8]) -> Result<(), Error> {
    while !bytes.is_empty() {
        let n = connection.write(bytes).map_err(Into::<Error>::into)?;
        if n == 0 {
            return Err(Error::ConnAborted);
        }
        bytes = &bytes[n..];
    }
    connection.flush().map_err(Into::<Error>::into)
}

fn read_from<C: Connection>(slot: &mut Option<C>, buf: &mut [u8]) -> Result<usize, Error> {
    let connection = slot.as_mut().ok_or(Error::NotConnected)?;
    match connection.read(buf) {
        Ok(n) => Ok(n),
        Err(err) => {
            let err = err.into();
            discard(slot);
            Err(err)
        }
    }
}

/// Closes the connection in `slot`, if any, after an error that is already
/// being reported.
pub(crate) fn discard<C: Connection>(slot: &mut Option<C>) {
    if let Some(connection) = slot.take() {
        if let Err(err) = connection.close() {
            tracing::debug!(error = ?err, "close after failure also failed");
        }
    }
}

impl<C: Connection, const N: usize> Read for Response<C, N> {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.recv_chunk(buf)
    }
}

#[cfg(feature = "std")]
impl<C: Connection, const N: usize> std::io::Read for Response<C, N> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.recv_chunk(buf).map_err(std::io::Error::from)
    }
}

impl<C: Connection + fmt::Debug, const N: usize> fmt::Debug for Response<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field("transfer_encodings", &self.transfer_encodings)
            .field("bytes_in_buffer", &self.bytes_in_buffer)
            .field("buffer_offset", &self.buffer_offset)
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}
