use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("speed control configuration error: {0}")]
    Config(String),
}

pub type ControlResult<T> = Result<T, ControlError>;
