//! Local HTTP server standing in for the prediction service in tests.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// A request as the service received it.
#[derive(Clone, Debug)]
pub(crate) struct CapturedRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: String,
}

impl CapturedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Accepts one connection per canned response, records each request and replies in order.
pub(crate) struct MockService {
    addr: SocketAddr,
    requests: Receiver<CapturedRequest>,
}

impl MockService {
    pub(crate) fn respond(response: impl Into<String>) -> Self {
        Self::spawn(vec![response.into()], None)
    }

    /// Like [`MockService::respond`], but holds the reply until `release` fires.
    pub(crate) fn respond_after(response: impl Into<String>, release: Receiver<()>) -> Self {
        Self::spawn(vec![response.into()], Some(release))
    }

    /// Serve `responses` to successive connections.
    pub(crate) fn sequence(responses: Vec<String>) -> Self {
        Self::spawn(responses, None)
    }

    pub(crate) fn json(status: u16, body: &str) -> Self {
        Self::respond(http_response(status, Some("application/json"), body))
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }

    pub(crate) fn next_request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("mock service received no request")
    }

    fn spawn(responses: Vec<String>, mut release: Option<Receiver<()>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");
        let (tx, requests) = mpsc::channel();
        thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                serve(stream, &response, release.take(), &tx);
            }
        });
        Self { addr, requests }
    }
}

fn serve(
    mut stream: TcpStream,
    response: &str,
    release: Option<Receiver<()>>,
    captured: &Sender<CapturedRequest>,
) {
    if let Some(request) = read_request(&mut stream) {
        let _ = captured.send(request);
    }
    if let Some(release) = release {
        let _ = release.recv_timeout(Duration::from_secs(10));
    }
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..read]);
        if let Some(pos) = raw.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&raw[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    while raw.len() < header_end + content_length {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..read]);
    }
    let body_end = raw.len().min(header_end + content_length);
    Some(CapturedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&raw[header_end..body_end]).into_owned(),
    })
}

/// Format a complete HTTP/1.1 response that closes the connection.
pub(crate) fn http_response(status: u16, content_type: Option<&str>, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let content_type = content_type
        .map(|value| format!("Content-Type: {value}\r\n"))
        .unwrap_or_default();
    format!(
        "HTTP/1.1 {status} {reason}\r\n{content_type}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// A base URL nothing is listening on.
pub(crate) fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
