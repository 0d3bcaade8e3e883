//! Password hashing and token signing.
//!
//! Hashing runs on the worker pool so bcrypt never blocks the async runtime.

const BCRYPT_COST: u32 = 10;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};

use taxipark::auth_adapter::{ACCESS_TOKEN_EXPIRY, AccessToken, AuthCtx};
use taxipark::prelude::*;
use taxipark::worker::WorkerPool;

fn generate_password_hash_sync(password: Box<str>) -> TpResult<Box<str>> {
	let hash = bcrypt::hash(password.as_ref(), BCRYPT_COST).map_err(|_| Error::PermissionDenied)?;

	Ok(hash.into())
}

pub(crate) async fn generate_password_hash(
	worker: &WorkerPool,
	password: Box<str>,
) -> TpResult<Box<str>> {
	worker.run(move || generate_password_hash_sync(password)).await?
}

fn check_password_sync(password: Box<str>, password_hash: Box<str>) -> TpResult<()> {
	let res =
		bcrypt::verify(password.as_ref(), &password_hash).map_err(|_| Error::PermissionDenied)?;
	if res { Ok(()) } else { Err(Error::PermissionDenied) }
}

pub(crate) async fn check_password(
	worker: &WorkerPool,
	password: Box<str>,
	password_hash: Box<str>,
) -> TpResult<()> {
	worker.run(move || check_password_sync(password, password_hash)).await?
}

fn generate_access_token_sync(username: Box<str>, jwt_secret: &str) -> TpResult<Box<str>> {
	let access_token = AccessToken {
		sub: username,
		exp: Timestamp::from_now(ACCESS_TOKEN_EXPIRY),
	};

	let token = encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&access_token,
		&EncodingKey::from_secret(jwt_secret.as_bytes()),
	)
	.map_err(|_| Error::PermissionDenied)?
	.into();

	Ok(token)
}

pub(crate) async fn generate_access_token(
	worker: &WorkerPool,
	username: Box<str>,
	jwt_secret: Box<str>,
) -> TpResult<Box<str>> {
	worker.run(move || generate_access_token_sync(username, &jwt_secret)).await?
}

/// Validate an access token (JWT) and return the authenticated context
pub(crate) fn validate_access_token(jwt_secret: &str, token: &str) -> TpResult<AuthCtx> {
	let token_data = decode::<AccessToken<Box<str>>>(
		token,
		&DecodingKey::from_secret(jwt_secret.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::Unauthorized)?;

	Ok(AuthCtx { username: token_data.claims.sub })
}

// vim: ts=4
