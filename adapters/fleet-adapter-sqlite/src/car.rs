//! Car registry queries and driver assignment

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use crate::{driver, manufacturer};
use taxipark::fleet_adapter::{Car, CreateCarData, Driver, ListCarOptions, UpdateCarData};
use taxipark::prelude::*;

fn from_row(row: &SqliteRow) -> Result<Car, sqlx::Error> {
	Ok(Car {
		car_id: CarId(row.try_get("car_id")?),
		model: row.try_get("model")?,
		manufacturer_id: ManufacturerId(row.try_get("manufacturer_id")?),
		manufacturer_name: row.try_get("manufacturer_name")?,
		created_at: Timestamp(row.try_get("created_at")?),
	})
}

/// List cars, optionally filtered by a case-insensitive model substring
pub(crate) async fn list(db: &SqlitePool, opts: &ListCarOptions) -> TpResult<Vec<Car>> {
	let mut query = sqlx::QueryBuilder::new(
		"SELECT c.car_id, c.model, c.manufacturer_id, m.name AS manufacturer_name, c.created_at
		FROM cars c
		JOIN manufacturers m ON m.manufacturer_id=c.manufacturer_id",
	);

	if let Some(q) = &opts.q {
		query.push(" WHERE c.model LIKE ").push_bind(format!("%{}%", q));
	}
	query.push(" ORDER BY c.model");

	let res = query.build().fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	collect_res(res.iter().map(from_row))
}

pub(crate) async fn read(db: &SqlitePool, car_id: CarId) -> TpResult<Car> {
	let res = sqlx::query(
		"SELECT c.car_id, c.model, c.manufacturer_id, m.name AS manufacturer_name, c.created_at
		FROM cars c
		JOIN manufacturers m ON m.manufacturer_id=c.manufacturer_id
		WHERE c.car_id=?",
	)
	.bind(car_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn create(db: &SqlitePool, data: &CreateCarData<'_>) -> TpResult<CarId> {
	// Reject unknown manufacturers with NotFound instead of a raw FK error
	manufacturer::read(db, data.manufacturer_id).await?;

	let res = sqlx::query(
		"INSERT INTO cars (model, manufacturer_id) VALUES (?, ?) RETURNING car_id",
	)
	.bind(data.model)
	.bind(data.manufacturer_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| Ok(CarId(row.try_get("car_id")?)))
}

pub(crate) async fn update(db: &SqlitePool, car_id: CarId, data: &UpdateCarData) -> TpResult<()> {
	// Reject unknown manufacturers with NotFound instead of a raw FK error
	if let Patch::Value(manufacturer_id) = &data.manufacturer_id {
		manufacturer::read(db, *manufacturer_id).await?;
	}

	let mut query = sqlx::QueryBuilder::new("UPDATE cars SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "model", &data.model, |v| v.as_ref());
	has_updates =
		push_patch!(query, has_updates, "manufacturer_id", &data.manufacturer_id, |v| v.0);

	if !has_updates {
		// No fields to update, but not an error
		return Ok(());
	}

	query.push(" WHERE car_id=").push_bind(car_id.0);

	let res =
		query.build().execute(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, car_id: CarId) -> TpResult<()> {
	let res = sqlx::query("DELETE FROM cars WHERE car_id=?")
		.bind(car_id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

/// Drivers currently assigned to a car
pub(crate) async fn list_drivers(db: &SqlitePool, car_id: CarId) -> TpResult<Vec<Driver>> {
	let res = sqlx::query(
		"SELECT d.driver_id, d.username, d.first_name, d.last_name, d.license_number, d.created_at
		FROM drivers d
		JOIN car_drivers cd ON cd.driver_id=d.driver_id
		WHERE cd.car_id=?
		ORDER BY d.username",
	)
	.bind(car_id.0)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(res.iter().map(driver::from_row))
}

pub(crate) async fn assign_driver(
	db: &SqlitePool,
	car_id: CarId,
	driver_id: DriverId,
) -> TpResult<()> {
	// Surface missing car/driver as NotFound rather than an FK violation
	read(db, car_id).await?;
	driver::read(db, driver_id).await?;

	sqlx::query("INSERT OR IGNORE INTO car_drivers (car_id, driver_id) VALUES (?, ?)")
		.bind(car_id.0)
		.bind(driver_id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn unassign_driver(
	db: &SqlitePool,
	car_id: CarId,
	driver_id: DriverId,
) -> TpResult<()> {
	let res = sqlx::query("DELETE FROM car_drivers WHERE car_id=? AND driver_id=?")
		.bind(car_id.0)
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
