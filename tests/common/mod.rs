#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use libhttp::network::error::Error;
use libhttp::network::{Close, Connect, Connection, Read, Write};

/// One scripted outcome of a `read` call.
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver these bytes, split across reads if the caller's buffer is smaller.
    Data(Vec<u8>),
    /// Fail the read.
    Fail(Error),
}

/// What the mock observed, shared with the test after the connection has
/// moved into a `Response`.
#[derive(Debug, Default)]
pub struct Wire {
    pub written: Vec<u8>,
    pub reads: usize,
    pub flushed: bool,
    pub closed: bool,
    pub connects: usize,
    pub target: Option<(String, u16)>,
}

pub type SharedWire = Rc<RefCell<Wire>>;

#[derive(Debug)]
pub struct MockConnection {
    script: VecDeque<Step>,
    wire: SharedWire,
    write_error: Option<Error>,
    is_open: bool,
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotConnected);
        }
        self.wire.borrow_mut().reads += 1;
        match self.script.pop_front() {
            None => Ok(0),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Data(mut data)) => {
                let len = buf.len().min(data.len());
                buf[..len].copy_from_slice(&data[..len]);
                if len < data.len() {
                    self.script.push_front(Step::Data(data.split_off(len)));
                }
                Ok(len)
            }
        }
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotConnected);
        }
        if let Some(err) = self.write_error {
            return Err(err);
        }
        // Accept at most 7 bytes per call to exercise partial writes.
        let len = buf.len().min(7);
        self.wire.borrow_mut().written.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if !self.is_open {
            return Err(Error::NotConnected);
        }
        self.wire.borrow_mut().flushed = true;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(mut self) -> Result<(), Self::Error> {
        self.is_open = false;
        self.wire.borrow_mut().closed = true;
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Hands out one scripted connection per `connect`.
#[derive(Debug, Default)]
pub struct MockNetwork {
    script: Vec<Step>,
    connect_error: Option<Error>,
    write_error: Option<Error>,
    wire: SharedWire,
}

impl MockNetwork {
    /// A server that answers with `chunks`, one per read, then closes.
    pub fn replying(chunks: &[&[u8]]) -> (Self, SharedWire) {
        Self::scripted(chunks.iter().map(|chunk| Step::Data(chunk.to_vec())).collect())
    }

    pub fn scripted(script: Vec<Step>) -> (Self, SharedWire) {
        let network = Self {
            script,
            ..Self::default()
        };
        let wire = Rc::clone(&network.wire);
        (network, wire)
    }

    pub fn refusing(err: Error) -> (Self, SharedWire) {
        let (mut network, wire) = Self::scripted(Vec::new());
        network.connect_error = Some(err);
        (network, wire)
    }

    pub fn failing_writes(mut self, err: Error) -> Self {
        self.write_error = Some(err);
        self
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        {
            let mut wire = self.wire.borrow_mut();
            wire.connects += 1;
            wire.target = Some((host.to_string(), port));
        }
        if let Some(err) = self.connect_error {
            return Err(err);
        }
        Ok(MockConnection {
            script: self.script.drain(..).collect(),
            wire: Rc::clone(&self.wire),
            write_error: self.write_error,
            is_open: true,
        })
    }
}

/// Reads the rest of the body with a buffer of `chunk` bytes.
pub fn drain_body<C: Connection, const N: usize>(
    response: &mut libhttp::Response<C, N>,
    chunk: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    let mut buf = vec![0u8; chunk];
    loop {
        let n = response.recv_chunk(&mut buf)?;
        if n == 0 {
            return Ok(body);
        }
        body.extend_from_slice(&buf[..n]);
    }
}
