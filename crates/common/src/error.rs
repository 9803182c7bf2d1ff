use faststr::FastStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Upstream API error: {message} (type: {error_type}, param: {param}, code: {code})")]
    UpstreamApi {
        message:    FastStr,
        error_type: FastStr,
        param:      FastStr,
        code:       FastStr,
    },
    #[error("Invalid response data: {0} status: {1}")]
    InvalidResponseData(FastStr, u16),
    #[error("Malformed event data: {0}")]
    MalformedEvent(#[from] serde_json::Error),
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
