//! Authentication middleware. Fleet routes are only served to logged-in
//! drivers; everything else gets a 401.

use axum::{
	body::Body,
	extract::State,
	http::{Request, response::Response},
	middleware::Next,
};

use crate::prelude::*;

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> TpResult<Response<Body>> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::Unauthorized)?;

	let token = auth_header.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;
	let ctx = app.auth_adapter.validate_access_token(token).await?;

	req.extensions_mut().insert(ctx);

	Ok(next.run(req).await)
}

// vim: ts=4
