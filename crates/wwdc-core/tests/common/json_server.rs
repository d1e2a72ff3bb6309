//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status and body and records the request
//! paths it saw. In stall mode it never answers and counts clients that
//! hang up on it.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct JsonServerOptions {
    pub status: &'static str,
    pub content_type: &'static str,
    /// Accept connections but never answer (for deadline tests).
    pub stall: bool,
}

impl Default for JsonServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
            stall: false,
        }
    }
}

/// Handle to a running server. The server lives until the process exits.
pub struct JsonServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    paths: Arc<Mutex<Vec<String>>>,
    hangups: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Request paths received so far, in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    /// Stalled connections the client closed before getting an answer.
    pub fn hangups(&self) -> usize {
        self.hangups.load(Ordering::SeqCst)
    }
}

pub fn start(body: impl Into<Vec<u8>>) -> JsonServer {
    start_with_options(body, JsonServerOptions::default())
}

pub fn start_with_options(body: impl Into<Vec<u8>>, opts: JsonServerOptions) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.into());
    let paths = Arc::new(Mutex::new(Vec::new()));
    let hangups = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&paths);
    let closed = Arc::clone(&hangups);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            let closed = Arc::clone(&closed);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &seen, &closed));
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/", port),
        paths,
        hangups,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: &JsonServerOptions,
    seen: &Mutex<Vec<String>>,
    closed: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("").to_string();
    seen.lock().unwrap().push(path);

    if opts.stall {
        // Wait for the client to hang up; a read timeout means it never did.
        let _ = stream.set_read_timeout(Some(Duration::from_secs(10)));
        if let Ok(0) = stream.read(&mut buf) {
            closed.fetch_add(1, Ordering::SeqCst);
        }
        return;
    }
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
