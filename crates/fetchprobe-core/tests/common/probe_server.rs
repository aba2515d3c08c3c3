//! Minimal HTTP/1.1 server for fetch integration tests.
//!
//! Serves one static body per connection. Options cover the failure modes
//! the fetcher classifies: a chosen status code, a delayed response, a
//! connection closed before any response, and a body truncated mid-stream.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ProbeServerOptions {
    /// Status code for the response line.
    pub status: u32,
    /// Content-Type header value, if any.
    pub content_type: Option<&'static str>,
    /// Sleep before writing any response bytes (timeout tests).
    pub delay: Option<Duration>,
    /// Close the connection after reading the request, before any response.
    pub close_before_response: bool,
    /// Advertise the full Content-Length but send only this many body bytes.
    pub truncate_body_at: Option<usize>,
}

impl Default for ProbeServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: Some("application/octet-stream"),
            delay: None,
            close_before_response: false,
            truncate_body_at: None,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the URL
/// of the served resource. The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ProbeServerOptions::default())
}

/// Like `start` but with customized behavior (status, delay, close, truncate).
pub fn start_with_options(body: Vec<u8>, opts: ProbeServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/probe.bin", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ProbeServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    if opts.close_before_response {
        let _ = stream.shutdown(std::net::Shutdown::Both);
        return;
    }
    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }
    let reason = match opts.status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let content_type = opts
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        reason,
        body.len(),
        content_type
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    let sent = opts.truncate_body_at.unwrap_or(body.len()).min(body.len());
    let _ = stream.write_all(&body[..sent]);
    let _ = stream.flush();
    let _ = stream.shutdown(std::net::Shutdown::Both);
}
