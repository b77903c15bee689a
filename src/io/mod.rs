pub mod csv;
pub mod json;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization failed")]
    Csv(#[from] ::csv::Error),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}
