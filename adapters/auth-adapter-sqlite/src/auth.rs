//! Login credential management

use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::crypto;
use taxipark::auth_adapter::AuthLogin;
use taxipark::prelude::*;
use taxipark::worker::WorkerPool;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Get or generate the JWT secret for HS256 signing
pub(crate) async fn ensure_jwt_secret(db: &SqlitePool) -> TpResult<Box<str>> {
	// Try to read an existing secret
	let res = sqlx::query("SELECT value FROM vars WHERE key = ?1")
		.bind("jwt_secret")
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if let Some(row) = res {
		return row.try_get("value").inspect_err(inspect).or(Err(Error::DbError));
	}

	// Generate a new secret (32 random bytes, base64 encoded)
	use base64::Engine;
	use rand::Rng;
	let mut secret_bytes = [0u8; 32];
	let mut rng = rand::rng();
	rng.fill_bytes(&mut secret_bytes);
	let secret_str = base64::engine::general_purpose::STANDARD.encode(secret_bytes);

	sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES (?1, ?2)")
		.bind("jwt_secret")
		.bind(&secret_str)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	info!("Generated new JWT secret");
	Ok(secret_str.into())
}

pub(crate) async fn create_login(
	db: &SqlitePool,
	worker: &Arc<WorkerPool>,
	username: &str,
	password: &str,
) -> TpResult<()> {
	let hash = crypto::generate_password_hash(worker, password.into()).await?;

	sqlx::query("INSERT INTO logins (username, password) VALUES (?1, ?2)")
		.bind(username)
		.bind(hash.as_ref())
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Check a driver password and issue an access token
pub(crate) async fn check_password(
	db: &SqlitePool,
	worker: &Arc<WorkerPool>,
	username: &str,
	password: &str,
	jwt_secret: &str,
) -> TpResult<AuthLogin> {
	let res = sqlx::query("SELECT password FROM logins WHERE username = ?1")
		.bind(username)
		.fetch_one(db)
		.await;

	match res {
		Err(_) => Err(Error::PermissionDenied),
		Ok(row) => {
			let password_hash: Box<str> = row.try_get("password").or(Err(Error::DbError))?;

			crypto::check_password(worker, password.into(), password_hash).await?;

			let token = crypto::generate_access_token(
				worker,
				Box::from(username),
				Box::from(jwt_secret),
			)
			.await?;

			Ok(AuthLogin { username: Box::from(username), token })
		}
	}
}

pub(crate) async fn update_password(
	db: &SqlitePool,
	worker: &Arc<WorkerPool>,
	username: &str,
	password: &str,
) -> TpResult<()> {
	let hash = crypto::generate_password_hash(worker, password.into()).await?;

	let res = sqlx::query("UPDATE logins SET password = ?1 WHERE username = ?2")
		.bind(hash.as_ref())
		.bind(username)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete_login(db: &SqlitePool, username: &str) -> TpResult<()> {
	let res = sqlx::query("DELETE FROM logins WHERE username = ?1")
		.bind(username)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

// vim: ts=4
