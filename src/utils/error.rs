use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Missing value: {field}")]
    MissingValue { field: String },
}

pub type Result<T> = std::result::Result<T, ScrubError>;
