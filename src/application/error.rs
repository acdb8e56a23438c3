use crate::domain::model::id::BookId;
use crate::infra::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
