//! SQLite implementation of the taxipark auth adapter.
//!
//! Stores bcrypt password hashes for driver accounts and issues HS256
//! access tokens signed with a secret generated on first start and
//! persisted in the database.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use std::sync::Arc;

use taxipark::auth_adapter::{AuthAdapter, AuthCtx, AuthLogin};
use taxipark::prelude::*;
use taxipark::worker::WorkerPool;

mod auth;
mod crypto;
mod schema;

pub struct AuthAdapterSqlite {
	db: SqlitePool,
	worker: Arc<WorkerPool>,
	jwt_secret: Box<str>,
}

impl AuthAdapterSqlite {
	pub async fn new(worker: Arc<WorkerPool>, path: impl AsRef<Path>) -> TpResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB open: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB init: {:#?}", err))
			.or(Err(Error::DbError))?;

		let jwt_secret = auth::ensure_jwt_secret(&db).await?;

		Ok(Self { db, worker, jwt_secret })
	}
}

#[async_trait]
impl AuthAdapter for AuthAdapterSqlite {
	async fn create_login(&self, username: &str, password: &str) -> TpResult<()> {
		auth::create_login(&self.db, &self.worker, username, password).await
	}

	async fn check_password(&self, username: &str, password: &str) -> TpResult<AuthLogin> {
		auth::check_password(&self.db, &self.worker, username, password, &self.jwt_secret).await
	}

	async fn validate_access_token(&self, token: &str) -> TpResult<AuthCtx> {
		crypto::validate_access_token(&self.jwt_secret, token)
	}

	async fn update_password(&self, username: &str, password: &str) -> TpResult<()> {
		auth::update_password(&self.db, &self.worker, username, password).await
	}

	async fn delete_login(&self, username: &str) -> TpResult<()> {
		auth::delete_login(&self.db, username).await
	}
}

// vim: ts=4
