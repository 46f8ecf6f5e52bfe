use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response: connect failure, DNS, or the
    /// bounded timeout elapsed.
    #[error("catalog unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-success status (auth rejection, rate
    /// limiting, missing resource, server error).
    #[error("catalog rejected the request with HTTP {status}")]
    RemoteRejection { status: StatusCode },

    /// The response body did not match the expected shape.
    #[error("catalog response was malformed: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}
