use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("http client build failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("payload encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("post did not succeed: status={status} body={body}")]
    Rejected { status: u16, body: String },
}
