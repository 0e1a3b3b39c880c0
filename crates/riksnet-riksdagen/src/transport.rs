//! Request seam between the client and the network

use riksnet_core::TransportError;

/// Issues one GET against the document API and returns the body.
pub trait Transport {
    fn get(&self, params: &[(&str, String)]) -> Result<String, TransportError>;
}

/// Live transport over the shared blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn get(&self, params: &[(&str, String)]) -> Result<String, TransportError> {
        riksnet_core::get_text(&self.base_url, params)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, params: &[(&str, String)]) -> Result<String, TransportError> {
        (**self).get(params)
    }
}
