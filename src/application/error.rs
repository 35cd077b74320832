use thiserror::Error;

use crate::domain::{BookingError, CatalogError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid date '{0}'. Use the YYYY-MM-DD format")]
    MalformedDate(String),

    #[error("Invalid room number: '{0}'")]
    InvalidRoomId(String),

    #[error("Invalid rate '{input}': {reason}")]
    InvalidRate { input: String, reason: String },

    #[error("Invalid room category '{0}'. Valid categories: single, double")]
    InvalidCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
