#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("DBPool error: {0}")]
    R2D2(#[from] r2d2::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
