use thiserror::Error;

use crate::domain::StudentNotFound;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<StudentNotFound> for AppError {
    fn from(err: StudentNotFound) -> Self {
        AppError::StudentNotFound(err.0)
    }
}
