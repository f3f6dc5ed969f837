use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to initialize the HTTP client.")]
    Client(#[source] reqwest::Error),
    #[error("Failed to parse `{url}` as a url.")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to download from url `{url}`.")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("The server returned HTTP status {status} for url `{url}`.")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unsupported value for major version: {0}")]
    UnsupportedVersion(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Failed to parse the update data from `{url}` as JSON.")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No download source for {0}")]
    SourceNotFound(String),
    #[error("No URL found for {0}")]
    MissingUrl(String),
}
