//! Shared error types for the standings system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid pool label: {label:?}")]
    InvalidPoolLabel { label: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
