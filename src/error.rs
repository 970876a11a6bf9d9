use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Unknown flavor")]
    UnknownFlavor { name: String },

    #[error("{capability} should be overridden")]
    NotImplemented { capability: &'static str },

    #[error("shop \"{name}\" has already been instantiated")]
    AlreadyInstantiated { name: String },

    #[error("Unknown topping \"{name}\"")]
    UnknownTopping { name: String },

    #[error("Unknown place \"{name}\"")]
    UnknownPlace { name: String },

    #[error("Failed to load config from {}: {source}", .path.display())]
    Config { path: PathBuf, source: BoxError },
}

impl ShopError {
    pub fn unknown_flavor(name: impl Into<String>) -> Self {
        Self::UnknownFlavor { name: name.into() }
    }

    pub fn not_implemented(capability: &'static str) -> Self {
        Self::NotImplemented { capability }
    }

    pub fn config(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::Config {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Errors caused by a bad order rather than a broken setup.
    pub fn is_order_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownFlavor { .. }
                | Self::UnknownTopping { .. }
                | Self::UnknownPlace { .. }
                | Self::NotImplemented { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
