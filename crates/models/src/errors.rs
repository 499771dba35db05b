use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("database error: {0}")]
    Db(String),
}
