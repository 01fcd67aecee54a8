use std::fmt;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    /// Selector order
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HttpMethod::GET => 0,
            HttpMethod::POST => 1,
            HttpMethod::PUT => 2,
            HttpMethod::DELETE => 3,
        }
    }

    pub fn next(&self) -> HttpMethod {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> HttpMethod {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a non-empty body is sent as the request payload
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::DELETE)
    }
}

/// HTTP Header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of the request being composed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    /// Emitted in order; duplicate keys are passed through
    pub headers: Vec<Header>,
    pub body: String,
}

/// Why a request produced no clean response
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// Rejected before anything was spawned
    EmptyUrl,
    /// The client could not be started or exited unsuccessfully
    ProcessFailed(String),
    /// The client exited cleanly but wrote to stderr
    Diagnostic(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EmptyUrl => write!(f, "URL cannot be empty"),
            RequestError::ProcessFailed(reason) => write!(f, "request failed: {}", reason),
            RequestError::Diagnostic(stderr) => write!(f, "{}", stderr),
        }
    }
}

impl std::error::Error for RequestError {}

/// Outcome of the last request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Captured stdout, kept even when `error` is set
    pub body: String,
    pub error: Option<RequestError>,
    pub time_ms: u64,
}

impl Response {
    pub fn failed(error: RequestError) -> Self {
        Response {
            body: String::new(),
            error: Some(error),
            time_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_cycle_wraps_both_ways() {
        assert_eq!(HttpMethod::DELETE.next(), HttpMethod::GET);
        assert_eq!(HttpMethod::GET.prev(), HttpMethod::DELETE);
        assert_eq!(HttpMethod::POST.next(), HttpMethod::PUT);
    }

    #[test]
    fn test_get_never_carries_body() {
        assert!(!HttpMethod::GET.has_body());
        assert!(HttpMethod::DELETE.has_body());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RequestError::EmptyUrl.to_string(), "URL cannot be empty");
        assert_eq!(
            RequestError::ProcessFailed("exit status 6".into()).to_string(),
            "request failed: exit status 6"
        );
        assert_eq!(
            RequestError::Diagnostic("warning: x\n".into()).to_string(),
            "warning: x\n"
        );
    }
}
