use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date `{input}`: expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
