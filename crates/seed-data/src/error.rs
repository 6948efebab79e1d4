use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("extension \"{0}\" is not installed")]
    MissingExtension(&'static str),

    #[error("relation \"{0}\" does not exist")]
    MissingTable(&'static str),
}
