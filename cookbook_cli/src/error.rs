use cookbook_catalog::error::CatalogError;
use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unexpected failure while loading configuration, input or tracing.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Error returned by a catalog registry.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A script operation references an author that was never created.
    #[error("unknown author `{name}`")]
    UnknownAuthor { name: String },
}

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(
    config::ConfigError,
    serde_json::Error,
    std::io::Error,
    tracing_subscriber::util::TryInitError,
);
