//! Fetches one URL and prints the status and body.
//!
//! ```text
//! fetch-demo [host] [port] [path]
//! ```

use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use libhttp::network::application::http::Client;
use libhttp::network::env::Environment;
use libhttp::network::error::Error;
use libhttp::network::tcp::TcpConnector;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const RESPONSE_SIZE: usize = 2048;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
    }

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "example.com".to_string());
    let port = match args.next().map(|port| port.parse::<u16>()) {
        None => 80,
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            eprintln!("invalid port: {e}");
            return ExitCode::FAILURE;
        }
    };
    let path = args.next().unwrap_or_else(|| "/".to_string());

    match fetch(&host, port, &path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.code(), cause = %err, "fetch failed");
            ExitCode::FAILURE
        }
    }
}

fn fetch(host: &str, port: u16, path: &str) -> Result<(), Error> {
    let env = Environment::start()?;
    let connector = TcpConnector::new()
        .connect_timeout(Duration::from_secs(10))
        .read_timeout(Duration::from_secs(10));
    let mut client = Client::new(&env, connector);

    let mut response = client.simple_get(host, port, path)?;
    println!("Response code: {}", response.status_code());
    println!("Response contents:");

    let mut stdout = std::io::stdout().lock();
    let mut buf = [0u8; RESPONSE_SIZE];
    loop {
        let n = response.recv_chunk(&mut buf)?;
        if n == 0 {
            break;
        }
        stdout.write_all(&buf[..n])?;
    }
    stdout.flush()?;

    response.close()?;
    env.stop()
}
