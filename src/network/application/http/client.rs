use core::fmt::Write as _;

use heapless::String;

use super::request::{MAX_HEADER_VALUE_LEN, Method, Request};
use super::response::Response;
use crate::config::{Config, REQUEST_BUFFER_LEN, RESPONSE_BUFFER_LEN};
use crate::network::Connect;
use crate::network::env::Environment;
use crate::network::error::Error;

const DEFAULT_PORT: u16 = 80;

/// Result of a request: the response, ready for its body to be streamed.
pub type ResponseResult<T, const N: usize> = Result<Response<<T as Connect>::Connection, N>, Error>;

/// A blocking HTTP/1.0 client.
///
/// Each request opens a fresh connection through the connector, sends the
/// request, and parses the response head into a buffer of `N` bytes. The
/// returned [`Response`] owns the connection; read the body with
/// [`Response::recv_chunk`] until it returns `0`, then
/// [`close`](Response::close) it.
///
/// No step is retried. When a step fails, the connection is closed and that
/// step's error is returned.
#[derive(Debug)]
pub struct Client<'a, T: Connect, const N: usize = RESPONSE_BUFFER_LEN> {
    env: &'a Environment,
    connector: T,
    config: Config<'a>,
}

impl<'a, T: Connect> Client<'a, T> {
    /// A client with the default configuration and buffer size.
    pub fn new(env: &'a Environment, connector: T) -> Self {
        Self::with_config(env, connector, Config::default())
    }

    /// A client with an explicit configuration and the default buffer size.
    pub fn with_config(env: &'a Environment, connector: T, config: Config<'a>) -> Self {
        Client::with_buffer_len(env, connector, config)
    }
}

impl<'a, T: Connect, const N: usize> Client<'a, T, N> {
    /// A client whose responses buffer `N` bytes.
    ///
    /// ```
    /// # use libhttp::config::Config;
    /// # use libhttp::network::application::http::Client;
    /// # use libhttp::network::env::Environment;
    /// # use libhttp::network::tcp::TcpConnector;
    /// let env = Environment::start().unwrap();
    /// let client = Client::<'_, _, 1024>::with_buffer_len(&env, TcpConnector::new(), Config::default());
    /// # drop(client);
    /// ```
    pub fn with_buffer_len(env: &'a Environment, connector: T, config: Config<'a>) -> Self {
        Self {
            env,
            connector,
            config,
        }
    }

    /// The environment this client runs in.
    pub fn environment(&self) -> &'a Environment {
        self.env
    }

    /// The client configuration.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Sends `request` to `host:port` and reads the response head.
    ///
    /// The request is formatted after the connection is established, into a
    /// buffer of [`REQUEST_BUFFER_LEN`] bytes that is released when the call
    /// returns.
    pub fn request(&mut self, host: &str, port: u16, request: &Request<'_>) -> ResponseResult<T, N> {
        self.exchange(host, port, |response| {
            let payload = request.encode::<REQUEST_BUFFER_LEN>()?;
            tracing::trace!(bytes = payload.len(), "sending request");
            response.send(&payload)
        })
    }

    /// Sends caller-formatted request bytes verbatim and reads the response
    /// head.
    pub fn request_bytes(&mut self, host: &str, port: u16, bytes: &[u8]) -> ResponseResult<T, N> {
        self.exchange(host, port, |response| response.send(bytes))
    }

    /// Sends `method path` with `Host` and `User-Agent` headers, and `body`
    /// if it is not empty.
    ///
    /// ```text
    /// METHOD path HTTP/1.0\r\n
    /// Host: host[:port]\r\n
    /// User-Agent: agent\r\n
    /// [Content-Length: n\r\n]
    /// \r\n
    /// body
    /// ```
    pub fn simple_request(
        &mut self,
        method: Method,
        host: &str,
        port: u16,
        path: &str,
        body: &[u8],
    ) -> ResponseResult<T, N> {
        let host_value = host_header(host, port)?;
        let mut builder = Request::builder(method, path)
            .protocol(self.config.protocol)
            .header("Host", &host_value)
            .header("User-Agent", self.config.user_agent);
        if !body.is_empty() {
            builder = builder.body(body);
        }
        let request = builder.build()?;
        self.request(host, port, &request)
    }

    /// [`simple_request`](Client::simple_request) with `GET` and no body.
    pub fn simple_get(&mut self, host: &str, port: u16, path: &str) -> ResponseResult<T, N> {
        self.simple_request(Method::Get, host, port, path, &[])
    }

    fn exchange<F>(&mut self, host: &str, port: u16, send: F) -> ResponseResult<T, N>
    where
        F: FnOnce(&mut Response<T::Connection, N>) -> Result<(), Error>,
    {
        tracing::debug!(host, port, "connecting");
        let connection = self
            .connector
            .connect(host, port)
            .map_err(Into::<Error>::into)?;
        let mut response = Response::new(connection);

        let result = send(&mut response).and_then(|()| response.read_head());
        match result {
            Ok(()) => Ok(response),
            Err(err) => {
                tracing::debug!(host, port, error = %err, "request failed");
                if let Err(close_err) = response.close() {
                    tracing::debug!(error = %close_err, "close after failed request");
                }
                Err(err)
            }
        }
    }
}

fn host_header(host: &str, port: u16) -> Result<String<MAX_HEADER_VALUE_LEN>, Error> {
    let mut value: String<MAX_HEADER_VALUE_LEN> = String::new();
    let written = if port == DEFAULT_PORT {
        value.push_str(host).map_err(|()| core::fmt::Error)
    } else {
        write!(value, "{host}:{port}")
    };
    written.map_err(|_| Error::InvalidArgument)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_header_omits_default_port() {
        assert_eq!(host_header("example.com", 80).unwrap().as_str(), "example.com");
        assert_eq!(host_header("example.com", 8080).unwrap().as_str(), "example.com:8080");
    }

    #[test]
    fn host_header_too_long() {
        let host = "h".repeat(MAX_HEADER_VALUE_LEN + 1);
        assert_eq!(host_header(&host, 80).unwrap_err(), Error::InvalidArgument);
    }
}
