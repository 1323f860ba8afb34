use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Booking already in progress")]
    AlreadySubmitting,

    #[error("Network error: {0}")]
    Network(#[from] eyre::Report),
}

pub type MarketResult<T> = Result<T, MarketError>;
