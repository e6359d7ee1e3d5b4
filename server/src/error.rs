use lecturai::{AppError, RenderError, StorageError};
use rocket::{
    http::Status,
    response::{self, content::RawHtml, Responder},
    Request,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::views;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Upload could not be read: {0}")]
    Upload(#[from] std::io::Error),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::App(AppError::Storage(err))
    }
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::App(AppError::NotFound(_)) => Status::NotFound,
            ApiError::App(AppError::Render(RenderError::Unavailable)) => Status::NotFound,
            ApiError::App(AppError::Validation(_)) => Status::BadRequest,
            ApiError::Upload(_) => Status::BadRequest,
            ApiError::App(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            error!(error = %self, uri = %req.uri(), "request failed");
        } else {
            warn!(error = %self, uri = %req.uri(), "request rejected");
        }

        let body = views::error_page(status, &self.to_string());
        (status, RawHtml(body)).respond_to(req)
    }
}
