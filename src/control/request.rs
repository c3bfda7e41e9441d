use std::collections::HashMap;

/// Request methods the control interface understands.
///
/// Operations are reachable with any of these; routing looks only at the
/// path and query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    HEAD,
}

impl Method {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }
}

/// A parsed control request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Raw request target, e.g. "/set?backends=localhost:4444".
    pub target: String,
    /// HTTP version as written on the request line.
    pub version: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// The target with any query string stripped.
    pub fn path(&self) -> &str {
        match self.target.split_once('?') {
            Some((path, _)) => path,
            None => &self.target,
        }
    }

    /// First query parameter named `name`, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, query) = self.target.split_once('?')?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Whether the connection should stay open after the response.
    /// HTTP/1.1 defaults to keep-alive; anything else must ask for it.
    pub fn keep_alive(&self) -> bool {
        self.header("Connection")
            .map(|v| v.eq_ignore_ascii_case("keep-alive"))
            .unwrap_or(self.version == "HTTP/1.1")
    }
}
