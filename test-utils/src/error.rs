use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to prepare the session store.
    #[error("Failed to initialize session store: {0}")]
    Session(String),

    /// A part of the context was requested before it could be created.
    #[error("Test context {0} is not initialized")]
    NotInitialized(&'static str),
}
