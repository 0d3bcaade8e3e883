use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type TpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	Unauthorized,
	PermissionDenied,
	DbError,
	ValidationError(String),
	Parse,
	Internal(Box<str>),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized").into_response(),
			Error::PermissionDenied => {
				(StatusCode::FORBIDDEN, "permission denied").into_response()
			}
			Error::ValidationError(msg) => {
				(StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
			}
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4
