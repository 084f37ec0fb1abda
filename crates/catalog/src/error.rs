pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors returned while talking to the catalog service.
///
/// Every variant renders as a short message suitable for showing inline
/// next to the results.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The service answered with a non-2xx status.
    #[error("Network error (HTTP {status})")]
    Status { status: u16 },

    /// The request never produced a response, or the body could not be read.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the expected JSON shape.
    #[error("Invalid response from catalog: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CatalogError {
    /// 4xx responses, usually a query the service rejected.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CatalogError::Status { status } if (400..500).contains(status))
    }

    /// 5xx responses, the service itself is unavailable.
    pub fn is_server_error(&self) -> bool {
        matches!(self, CatalogError::Status { status } if (500..600).contains(status))
    }
}
