use std::{env, path, sync::Arc};

use taxipark_auth_adapter_sqlite::AuthAdapterSqlite;
use taxipark_fleet_adapter_sqlite::FleetAdapterSqlite;
use taxipark_types::error::Error;
use taxipark_types::worker::WorkerPool;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
		listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
	};
	std::fs::create_dir_all(&config.db_dir)?;

	let worker = Arc::new(WorkerPool::new(2));
	let fleet_adapter = Arc::new(FleetAdapterSqlite::new(config.db_dir.join("fleet.db")).await?);
	let auth_adapter =
		Arc::new(AuthAdapterSqlite::new(worker, config.db_dir.join("auth.db")).await?);

	let app = taxipark::AppBuilder::new()
		.listen(config.listen)
		.fleet_adapter(fleet_adapter)
		.auth_adapter(auth_adapter)
		.build()?;

	taxipark::run(app).await
}

// vim: ts=4
