//! Requests against a real server. Run with `cargo test -- --ignored`;
//! `TEST_HTTP_ADDRESS` (also read from `.env`) overrides the target.
#![cfg(feature = "std")]

use dotenvy::dotenv;
use libhttp::network::application::http::{Client, Method, Request};
use libhttp::network::env::Environment;
use libhttp::network::tcp::TcpConnector;
use std::env;
use std::io::Read;
use std::time::Duration;

fn target() -> (String, u16) {
    dotenv().ok();
    let address = env::var("TEST_HTTP_ADDRESS").unwrap_or("httpbin.org:80".to_string());
    match address.rsplit_once(':') {
        Some((host, port)) => (host.to_string(), port.parse().expect("invalid port")),
        None => (address, 80),
    }
}

fn connector() -> TcpConnector {
    TcpConnector::new()
        .connect_timeout(Duration::from_secs(5))
        .read_timeout(Duration::from_secs(5))
}

#[test]
#[ignore = "needs network access"]
fn test_http_get() {
    let (host, port) = target();
    let env = Environment::start().unwrap();
    let mut client = Client::new(&env, connector());

    let mut response = client.simple_get(&host, port, "/get").unwrap();
    assert_eq!(response.status_code(), 200);

    let mut body = String::new();
    response.read_to_string(&mut body).unwrap();
    assert!(body.contains("\"url\""));
    response.close().unwrap();
}

#[test]
#[ignore = "needs network access"]
fn test_http_post() {
    let (host, port) = target();
    let env = Environment::start().unwrap();
    let mut client = Client::new(&env, connector());

    let host_header = if port == 80 { host.clone() } else { format!("{host}:{port}") };
    let body = r#"{"hello":"world"}"#;
    let request = Request::builder(Method::Post, "/post")
        .header("Host", &host_header)
        .header("Content-Type", "application/json")
        .body(body.as_bytes())
        .build()
        .unwrap();

    let mut response = client.request(&host, port, &request).unwrap();
    assert_eq!(response.status_code(), 200);

    let mut echoed = String::new();
    response.read_to_string(&mut echoed).unwrap();
    assert!(echoed.contains("hello"));
    response.close().unwrap();
}
