use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimalError {
    #[error("Failed to write animal output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnimalError>;
