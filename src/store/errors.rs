use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("table request failed with status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("table returned no representation for the written row")]
    MissingRow,
}
