use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StargazeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse stars file: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Stars file not found at path: {0}")]
    StarsFileNotFound(PathBuf),

    #[error("Unknown output: {0}")]
    UnknownOutput(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<StargazeError>),
}

impl StargazeError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::JsonParseError(err) => format!("Failed to parse JSON: {err}"),
            Self::StarsFileNotFound(path) => {
                format!("Stars file not found at: {}", path.display())
            }
            Self::UnknownOutput(name) => format!(
                "Unknown output '{name}'. Run `stargaze outputs` to list the available ones"
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StargazeError>;
