//! Blocking HTTP GET over a shared async client.
//!
//! Uses async reqwest internally on a shared tokio runtime, but presents a
//! sync interface so API clients can expose plain iterators. Each call owns
//! its request and response; nothing is held between calls.

use std::sync::{LazyLock, OnceLock};
use std::time::Duration;

/// Default connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default whole-request timeout (connect + headers + body)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport-level failure of a single request
#[derive(Debug)]
pub enum TransportError {
    /// HTTP error with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    /// Create HTTP error from reqwest error, without the request URL
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.without_url().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
        }
    }
}

/// Timeouts applied to the shared client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

static HTTP_CONFIG: OnceLock<HttpConfig> = OnceLock::new();

/// Install the process-wide HTTP settings.
///
/// Must run before the first request; later calls are ignored because the
/// shared client is already built.
pub fn set_http_config(config: HttpConfig) {
    if HTTP_CONFIG.set(config).is_err() {
        log::debug!("HTTP config already set, ignoring {config:?}");
    }
}

/// Current HTTP settings (defaults unless `set_http_config` ran first)
pub fn http_config() -> HttpConfig {
    *HTTP_CONFIG.get_or_init(HttpConfig::default)
}

static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let config = http_config();
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(concat!("riksnet/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared single-threaded tokio runtime; callers block on it.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// HTTP GET `url` with query `params` and return the body as text.
///
/// Non-2xx statuses are errors. Blocks the calling thread until the whole
/// body has arrived.
pub fn get_text(url: &str, params: &[(&str, String)]) -> Result<String, TransportError> {
    SHARED_RUNTIME.block_on(async {
        let request = http_client()
            .get(url)
            .query(params)
            .build()
            .map_err(TransportError::from_reqwest)?;
        log::debug!("GET {}", request.url());

        let response = http_client()
            .execute(request)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(TransportError::from_reqwest)?;
        response.text().await.map_err(TransportError::from_reqwest)
    })
}
