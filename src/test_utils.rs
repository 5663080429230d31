//! Shared test helpers
//!
//! A minimal loopback HTTP fixture so client and worker tests exercise the
//! real request path without touching the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};

/// Serve one canned HTTP response on a loopback socket.
///
/// Returns the endpoint URL to hit and a channel carrying the raw request
/// head, so tests can assert on the request line (URL encoding etc.).
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    let (request_tx, request_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");

        // Read until the end of the request head; GET requests have no body
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            if data.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = request_tx.send(String::from_utf8_lossy(&data).into_owned());

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
    });

    (format!("http://{addr}/search_game_title"), request_rx)
}

/// An endpoint URL nothing is listening on, for connection-failure tests
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/search_game_title")
}
