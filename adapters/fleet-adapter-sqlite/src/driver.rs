//! Driver registry queries

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use taxipark::fleet_adapter::{CreateDriverData, Driver, ListDriverOptions};
use taxipark::prelude::*;

const DRIVER_COLUMNS: &str =
	"driver_id, username, first_name, last_name, license_number, created_at";

pub(crate) fn from_row(row: &SqliteRow) -> Result<Driver, sqlx::Error> {
	Ok(Driver {
		driver_id: DriverId(row.try_get("driver_id")?),
		username: row.try_get("username")?,
		first_name: row.try_get("first_name")?,
		last_name: row.try_get("last_name")?,
		license_number: row.try_get("license_number")?,
		created_at: Timestamp(row.try_get("created_at")?),
	})
}

/// List drivers, optionally filtered by a case-insensitive username substring
pub(crate) async fn list(db: &SqlitePool, opts: &ListDriverOptions) -> TpResult<Vec<Driver>> {
	let mut query =
		sqlx::QueryBuilder::new(format!("SELECT {} FROM drivers", DRIVER_COLUMNS));

	if let Some(q) = &opts.q {
		query.push(" WHERE username LIKE ").push_bind(format!("%{}%", q));
	}
	query.push(" ORDER BY username");

	let res = query.build().fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	collect_res(res.iter().map(from_row))
}

pub(crate) async fn read(db: &SqlitePool, driver_id: DriverId) -> TpResult<Driver> {
	let res = sqlx::query(
		"SELECT driver_id, username, first_name, last_name, license_number, created_at
		FROM drivers WHERE driver_id=?",
	)
	.bind(driver_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn read_by_username(db: &SqlitePool, username: &str) -> TpResult<Driver> {
	let res = sqlx::query(
		"SELECT driver_id, username, first_name, last_name, license_number, created_at
		FROM drivers WHERE username=?",
	)
	.bind(username)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn create(db: &SqlitePool, data: &CreateDriverData<'_>) -> TpResult<DriverId> {
	let res = sqlx::query(
		"INSERT INTO drivers (username, first_name, last_name, license_number)
		VALUES (?, ?, ?, ?) RETURNING driver_id",
	)
	.bind(data.username)
	.bind(data.first_name)
	.bind(data.last_name)
	.bind(data.license_number)
	.fetch_one(db)
	.await;

	map_res(res, |row| Ok(DriverId(row.try_get("driver_id")?)))
}

pub(crate) async fn update_license(
	db: &SqlitePool,
	driver_id: DriverId,
	license_number: &str,
) -> TpResult<()> {
	let res = sqlx::query("UPDATE drivers SET license_number=? WHERE driver_id=?")
		.bind(license_number)
		.bind(driver_id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, driver_id: DriverId) -> TpResult<()> {
	let res = sqlx::query("DELETE FROM drivers WHERE driver_id=?")
		.bind(driver_id.0)
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
