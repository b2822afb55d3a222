//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes (path → status + body) and records every
//! requested path so tests can assert which pages were, or were not, fetched.
//! Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Content-Length to announce when it differs from the body length.
    pub declared_len: Option<usize>,
}

impl Route {
    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.as_bytes().to_vec(),
            declared_len: None,
        }
    }

    pub fn bytes(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "application/octet-stream",
            body,
            declared_len: None,
        }
    }

    /// Announces `declared_len` bytes but sends only `body`, then closes the connection.
    pub fn truncated(body: Vec<u8>, declared_len: usize) -> Self {
        Self {
            declared_len: Some(declared_len),
            ..Self::bytes(body)
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: Vec::new(),
            declared_len: None,
        }
    }
}

pub struct SiteServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SiteServer {
    /// Starts serving `routes` on a background thread. Runs until the process exits.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(p, r)| (p.to_string(), r))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    /// Base URL without trailing slash, e.g. `http://127.0.0.1:12345`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// URL on localhost where nothing listens (connection refused).
pub fn dead_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(path.clone());

    let missing = Route::status(404);
    let route = routes.get(&path).unwrap_or(&missing);
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.declared_len.unwrap_or(route.body.len())
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Catalog page markup in the layout the default selectors expect.
pub fn book_page(title: &str, hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, h)| format!(r#"<a class="c-button test-book{}-link" href="{}">get</a>"#, i, h))
        .collect();
    format!(
        r#"<!doctype html><html><body>
        <div class="page-title"><h1>{}</h1></div>
        <div class="cta-button-container cta-button-container--stacked u-pt-36">{}</div>
        </body></html>"#,
        title, links
    )
}
