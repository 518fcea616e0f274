use std::time::Duration;

/// Default User-Agent string for HTTP requests
pub const DEFAULT_USER_AGENT: &str = concat!("tenancy-http/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default response body limit (10 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Maximum body preview size for error messages (8KB).
///
/// Bounds how much of a non-2xx response body is read into
/// [`HttpError::HttpStatus`](crate::HttpError::HttpStatus).
pub const ERROR_BODY_PREVIEW_LIMIT: usize = 8 * 1024;

/// Which URL schemes the client accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportSecurity {
    /// Only `https://` URLs are accepted.
    #[default]
    TlsOnly,
    /// Both `http://` and `https://` are accepted. Meant for local backends and mock servers.
    AllowInsecureHttp,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout for a single request, including reading response headers
    pub request_timeout: Duration,

    /// Value of the `User-Agent` header sent with every request
    pub user_agent: String,

    /// Maximum accepted response body size in bytes
    pub max_body_size: usize,

    /// Accepted URL schemes
    pub transport: TransportSecurity,

    /// Headers added to every request before per-request headers.
    ///
    /// Typical use: `osd-xsrf: true` for dashboards backends, or a static
    /// `authorization` header.
    pub default_headers: Vec<(String, String)>,

    /// Idle connection timeout for the pool (`None` keeps connections indefinitely)
    pub pool_idle_timeout: Option<Duration>,

    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            transport: TransportSecurity::TlsOnly,
            default_headers: Vec::new(),
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 8,
        }
    }
}
