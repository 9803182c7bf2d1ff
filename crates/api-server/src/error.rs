use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build client")]
    FailedToBuildClient,

    #[error("relay error: {0}")]
    Relay(#[from] common::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
