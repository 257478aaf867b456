//! HTTP agent construction and bounded response reading.

use std::io::{self, Read};
use std::time::Duration;

/// Build an agent for talking to the prediction service.
///
/// `timeout` bounds the whole request when set; `None` leaves requests
/// unbounded, matching a plain browser fetch.
pub fn build_agent(timeout: Option<Duration>) -> ureq::Agent {
    let builder = ureq::AgentBuilder::new().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    match timeout {
        Some(timeout) => builder.timeout(timeout).build(),
        None => builder.build(),
    }
}

/// Read a response into memory, enforcing a maximum byte size.
pub fn read_response_bytes(response: ureq::Response, max_bytes: usize) -> io::Result<Vec<u8>> {
    if let Some(length) = declared_length(&response)
        && length > max_bytes as u64
    {
        return Err(too_large(format!("Response too large: {length} bytes")));
    }
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(too_large(format!("Response exceeded {max_bytes} bytes")));
    }
    Ok(bytes)
}

/// Read a response body as text. Invalid UTF-8 is replaced rather than rejected
/// because error bodies are only ever shown to the user.
pub fn read_response_text(response: ureq::Response, max_bytes: usize) -> Result<String, String> {
    read_response_bytes(response, max_bytes)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|err| err.to_string())
}

fn declared_length(response: &ureq::Response) -> Option<u64> {
    response.header("Content-Length")?.trim().parse().ok()
}

fn too_large(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
