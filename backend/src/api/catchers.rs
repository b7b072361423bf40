use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

use crate::api::ErrorBody;

#[catch(404)]
pub fn not_found(_req: &Request<'_>) -> (Status, Json<ErrorBody>) {
  (Status::NotFound, Json(ErrorBody::new("Resource not found")))
}

/// Any other status the router produces on its own (bad path parameters,
/// oversized bodies, panics).
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> (Status, Json<ErrorBody>) {
  (status, Json(ErrorBody::new(status.reason().unwrap_or("Unknown error"))))
}
