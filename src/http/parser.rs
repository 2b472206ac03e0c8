use crate::http::request::{parse_cookies, Request};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("malformed start line: {0:?}")]
    MalformedStartLine(String),
}

/// Parses one request as received in a single read.
///
/// The buffer may have been cut short; whatever header lines are present are
/// kept, including a trailing partial one. Only the start line must be whole.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split('\n');

    // Request line
    let start_line = lines.next().unwrap_or_default().trim_end_matches('\r');
    let parts: Vec<&str> = start_line.split_whitespace().collect();

    let [method, target, version] = parts[..] else {
        return Err(ParseError::MalformedStartLine(start_line.to_string()));
    };

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line == "\r" || line.is_empty() {
            break;
        }

        let (key, value) = line.split_once(':').unwrap_or((line, ""));

        headers.insert(
            key.to_ascii_lowercase(),
            value.trim().to_string(),
        );
    }

    let cookies = headers.get("cookie").map(|v| parse_cookies(v));

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
        headers,
        cookies,
    })
}
