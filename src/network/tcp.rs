use std::io::{self, ErrorKind, Read as _, Write as _};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Write};

/// Opens blocking TCP connections with `std::net`.
///
/// Host names are resolved with the system resolver and every candidate
/// address is tried in the order the resolver returned them. The first that
/// accepts wins; if none does, the error of the last attempt is reported.
#[derive(Debug, Clone, Default)]
pub struct TcpConnector {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl TcpConnector {
    /// A connector with no transport timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector using the timeouts of `config`.
    pub fn from_config(config: &Config<'_>) -> Self {
        Self {
            connect_timeout: config.connect_timeout(),
            read_timeout: config.read_timeout(),
        }
    }

    /// Bounds each connection attempt.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout).filter(|t| !t.is_zero());
        self
    }

    /// Bounds each blocking read; an expired read reports [`Error::Timeout`].
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout).filter(|t| !t.is_zero());
        self
    }

    fn attempt(&self, addr: &SocketAddr) -> io::Result<TcpStream> {
        let stream = match self.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout)?,
            None => TcpStream::connect(addr)?,
        };
        stream.set_read_timeout(self.read_timeout)?;
        Ok(stream)
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        let addrs = (host, port).to_socket_addrs().map_err(|err| {
            tracing::debug!(host, port, error = %err, "name resolution failed");
            Error::DnsFail
        })?;

        // An empty candidate list is a resolution failure too.
        let mut last = Error::DnsFail;
        for addr in addrs {
            match self.attempt(&addr) {
                Ok(stream) => {
                    tracing::debug!(%addr, "connected");
                    return Ok(TcpConnection::from_stream(stream));
                }
                Err(err) => {
                    tracing::debug!(%addr, error = %err, "connect attempt failed");
                    last = err.into();
                }
            }
        }
        Err(last)
    }
}

/// A connected TCP stream.
///
/// A failed read or write closes the socket before the error is returned;
/// every later operation then reports [`Error::NotConnected`].
#[derive(Debug)]
pub struct TcpConnection {
    stream: Option<TcpStream>,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Returns whether the socket is still open.
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    fn stream(&mut self) -> Result<&mut TcpStream, Error> {
        self.stream.as_mut().ok_or(Error::NotConnected)
    }

    fn fail(&mut self, err: io::Error) -> Error {
        let translated = Error::from(err);
        if self.stream.take().is_some() {
            tracing::warn!(error = %translated, "closing connection after transport error");
        }
        translated
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream()?.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(self.fail(err)),
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream()?.write(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(self.fail(err)),
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        match self.stream()?.flush() {
            Ok(()) => Ok(()),
            Err(err) => Err(self.fail(err)),
        }
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(mut self) -> Result<(), Self::Error> {
        let Some(stream) = self.stream.take() else {
            return Ok(());
        };
        match stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer already tore the connection down.
            Err(err) if err.kind() == ErrorKind::NotConnected => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Connection for TcpConnection {}
