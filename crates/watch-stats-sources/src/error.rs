use watch_stats_models::MediaKind;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{source_name} request failed: {message}")]
    Request { source_name: String, message: String },

    #[error("{} {id} not found", kind.as_str())]
    NotFound { kind: MediaKind, id: u64 },

    #[error("{0} is rate limiting requests")]
    RateLimited(String),

    #[error("Unexpected response from {source_name}: {message}")]
    Decode { source_name: String, message: String },

    #[error("Request gate closed")]
    GateClosed,
}

impl SourceError {
    pub fn request(source_name: &str, message: impl Into<String>) -> Self {
        Self::Request {
            source_name: source_name.to_string(),
            message: message.into(),
        }
    }

    /// Whether retrying later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::RateLimited(_))
    }
}
