use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid repeat rule: {0}")]
    InvalidRepeatRule(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
