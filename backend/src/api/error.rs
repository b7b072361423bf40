use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::{Error as JsonError, Json};
use thiserror::Error;
use tracing::debug;
use tunebox_core::CoreError;

use crate::api::ErrorBody;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a route can fail with, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] CoreError),

  /// The request body was not valid JSON for the expected shape.
  #[error("Invalid JSON body: {0}")]
  MalformedBody(String),
}

impl ApiError {
  pub fn status(&self) -> Status {
    match self {
      ApiError::Core(CoreError::NotFound(_)) => Status::NotFound,
      ApiError::Core(CoreError::Validation(_)) | ApiError::Core(CoreError::Conflict(_)) => Status::BadRequest,
      ApiError::MalformedBody(_) => Status::BadRequest,
    }
  }
}

impl From<JsonError<'_>> for ApiError {
  fn from(e: JsonError<'_>) -> Self {
    ApiError::MalformedBody(e.to_string())
  }
}

impl<'r> Responder<'r, 'static> for ApiError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    let status = self.status();
    debug!(method = %req.method(), uri = %req.uri(), %status, error = %self, "request rejected");
    (status, Json(ErrorBody::new(self.to_string()))).respond_to(req)
  }
}
