use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid term id '{0}': expected PREFIX:LOCAL")]
    InvalidTermId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
