//! Adapter that manages and stores authentication data: password hashes and
//! access tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TpResult;
use crate::types::Timestamp;

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_EXPIRY: i64 = 8 * 3600;

/// Access tokens are used to authenticate drivers (JWT, HS256).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessToken<S> {
	/// Subject - the username of the authenticated driver.
	pub sub: S,
	/// Expires At - Unix timestamp.
	pub exp: Timestamp,
}

/// Context struct for an authenticated request.
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub username: Box<str>,
}

/// Result of a successful password check: a fresh access token.
#[derive(Debug)]
pub struct AuthLogin {
	pub username: Box<str>,
	pub token: Box<str>,
}

#[async_trait]
pub trait AuthAdapter: Send + Sync {
	/// Store credentials for a new driver account.
	async fn create_login(&self, username: &str, password: &str) -> TpResult<()>;

	/// Verify a password and issue an access token.
	async fn check_password(&self, username: &str, password: &str) -> TpResult<AuthLogin>;

	/// Validate an access token and return the authenticated context.
	async fn validate_access_token(&self, token: &str) -> TpResult<AuthCtx>;

	async fn update_password(&self, username: &str, password: &str) -> TpResult<()>;

	/// Remove credentials (driver account deleted).
	async fn delete_login(&self, username: &str) -> TpResult<()>;
}

// vim: ts=4
