//! Riksnet Core - shared plumbing for the course network tools
//!
//! Error taxonomy, the blocking HTTP layer used by the API clients,
//! and logging/progress setup for the CLI.

pub mod error;
pub mod http;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use error::{Error, Result};
pub use http::{
    HttpConfig, SHARED_RUNTIME, TransportError, get_text, http_client, http_config,
    set_http_config,
};
pub use logging::{IndicatifLogger, Verbosity, init_logging};
pub use progress::{ProgressContext, SharedProgress, fmt_num};
