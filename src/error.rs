use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt lecture store {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF export is not available in this build")]
    Unavailable,
    #[error("PDF error: {0}")]
    Pdf(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Invalid upload: {0}")]
    Validation(String),
    #[error("Lecture not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(StorageError::Io(err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
