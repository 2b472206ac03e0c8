use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Every method is treated as a retrieval, so `method` is kept as the raw
/// token. Header names are always lower-case.
#[derive(Debug, Clone)]
pub struct Request {
    /// The method token (e.g. "GET")
    pub method: String,
    /// The request target as sent, query string included
    pub target: String,
    /// Protocol version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, lower-cased names mapped to trimmed values
    pub headers: HashMap<String, String>,
    /// Cookies from the `cookie` header; `None` when the header is absent
    pub cookies: Option<HashMap<String, String>>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<String>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

/// Splits a `Cookie` header value into name/value pairs.
///
/// Pairs are separated by `;` and split on the first `=`. Names are trimmed,
/// values are kept as sent. Pieces without `=` are ignored.
pub fn parse_cookies(value: &str) -> HashMap<String, String> {
    value
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .collect()
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: HashMap::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header; the name is lower-cased and the value trimmed.
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.headers.insert(
            key.as_ref().to_ascii_lowercase(),
            value.as_ref().trim().to_string(),
        );
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let cookies = self.headers.get("cookie").map(|v| parse_cookies(v));

        Ok(Request {
            method: self.method.unwrap_or_else(|| "GET".to_string()),
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            cookies,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn accept(&self) -> Option<&str> {
        self.header("accept")
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.header("user-agent")
    }

    /// Looks up a single cookie. `None` if the request carried no cookies
    /// at all or not this one.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .as_ref()
            .and_then(|c| c.get(name))
            .map(|v| v.as_str())
    }

    /// The target without its query string.
    pub fn path(&self) -> &str {
        match self.target.split_once('?') {
            Some((path, _query)) => path,
            None => &self.target,
        }
    }
}
