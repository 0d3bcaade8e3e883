//! Custom Axum extractors.
//!
//! Provides a `FromRequestParts` implementation for the authenticated
//! context set by the auth middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth_adapter::AuthCtx;
use crate::error::Error;

/// Authenticated driver context extracted from request extensions
/// (set by the auth middleware).
#[derive(Clone, Debug)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(ctx) = parts.extensions.get::<AuthCtx>().cloned() {
			Ok(Auth(ctx))
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
