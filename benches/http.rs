use criterion::{BatchSize, Criterion, Throughput};
use libhttp::network::application::http::parser::parse_head;
use libhttp::network::application::http::{Client, Method, Request};
use libhttp::network::env::Environment;
use libhttp::network::error::Error;
use libhttp::network::{Close, Connect, Connection, Read, Write};
use std::hint::black_box;

const REPLY: &[u8] = b"HTTP/1.0 200 OK\r\n\
Server: bench\r\n\
Date: Mon, 19 Oct 2026 10:00:00 GMT\r\n\
Content-Type: application/json\r\n\
Transfer-Encoding: gzip\r\n\
Cache-Control: no-store\r\n\
\r\n\
{\"status\":\"ok\"}";

/// Replays `REPLY` and swallows whatever is written.
struct ReplayConnection {
    offset: usize,
}

impl Read for ReplayConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(REPLY.len() - self.offset);
        buf[..n].copy_from_slice(&REPLY[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl Write for ReplayConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ReplayConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for ReplayConnection {}

struct ReplayNetwork;

impl Connect for ReplayNetwork {
    type Connection = ReplayConnection;
    type Error = Error;
    fn connect(&mut self, _host: &str, _port: u16) -> Result<Self::Connection, Self::Error> {
        Ok(ReplayConnection { offset: 0 })
    }
}

pub fn bench_parse_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_head");
    group.throughput(Throughput::Bytes(REPLY.len() as u64));
    group.bench_function("parse_head", |b| {
        b.iter(|| parse_head(black_box(REPLY)).expect("Failed to parse"))
    });
    group.finish();
}

pub fn bench_encode_request(c: &mut Criterion) {
    let body = br#"{"event":"boot","uptime":12345}"#;
    let request = Request::builder(Method::Post, "/analytics?ID=11111")
        .header("Host", "example.com")
        .header("User-Agent", libhttp::config::USER_AGENT)
        .header("Content-Type", "application/json")
        .basic_auth("device", "secret")
        .body(body)
        .build()
        .expect("Failed to build request");

    c.bench_function("encode_request", |b| {
        b.iter(|| {
            black_box(&request)
                .encode::<{ libhttp::config::REQUEST_BUFFER_LEN }>()
                .expect("Failed to encode")
        })
    });
}

pub fn bench_simple_get(c: &mut Criterion) {
    let env = Environment::start().expect("Failed to start environment");
    let mut group = c.benchmark_group("simple_get");
    group.throughput(Throughput::Bytes(REPLY.len() as u64));
    group.bench_function("simple_get", |b| {
        b.iter_batched_ref(
            || Client::new(&env, ReplayNetwork),
            |client| {
                let mut response = client
                    .simple_get("example.com", 80, "/status")
                    .expect("Failed to get");
                let mut chunk = [0u8; 64];
                while response.recv_chunk(&mut chunk).expect("Failed to read") != 0 {}
                response.close().expect("Failed to close");
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
