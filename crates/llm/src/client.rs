use async_trait::async_trait;

/// Trait for completion backends — each provider implements this.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one instruction + transcript chunk and return the completion text.
    async fn complete(&self, instruction: &str, chunk: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} — {body}")]
    Api { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}
