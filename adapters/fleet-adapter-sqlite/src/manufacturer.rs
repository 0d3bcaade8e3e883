//! Manufacturer registry queries

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use taxipark::fleet_adapter::{
	CreateManufacturerData, ListManufacturerOptions, Manufacturer, UpdateManufacturerData,
};
use taxipark::prelude::*;

fn from_row(row: &SqliteRow) -> Result<Manufacturer, sqlx::Error> {
	Ok(Manufacturer {
		manufacturer_id: ManufacturerId(row.try_get("manufacturer_id")?),
		name: row.try_get("name")?,
		country: row.try_get("country")?,
		created_at: Timestamp(row.try_get("created_at")?),
	})
}

/// List manufacturers, optionally filtered by a case-insensitive name substring
pub(crate) async fn list(
	db: &SqlitePool,
	opts: &ListManufacturerOptions,
) -> TpResult<Vec<Manufacturer>> {
	let mut query = sqlx::QueryBuilder::new(
		"SELECT manufacturer_id, name, country, created_at FROM manufacturers",
	);

	if let Some(q) = &opts.q {
		query.push(" WHERE name LIKE ").push_bind(format!("%{}%", q));
	}
	query.push(" ORDER BY name");

	let res = query.build().fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	collect_res(res.iter().map(from_row))
}

pub(crate) async fn read(
	db: &SqlitePool,
	manufacturer_id: ManufacturerId,
) -> TpResult<Manufacturer> {
	let res = sqlx::query(
		"SELECT manufacturer_id, name, country, created_at
		FROM manufacturers WHERE manufacturer_id=?",
	)
	.bind(manufacturer_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn create(
	db: &SqlitePool,
	data: &CreateManufacturerData<'_>,
) -> TpResult<ManufacturerId> {
	let res = sqlx::query(
		"INSERT INTO manufacturers (name, country) VALUES (?, ?) RETURNING manufacturer_id",
	)
	.bind(data.name)
	.bind(data.country)
	.fetch_one(db)
	.await;

	map_res(res, |row| Ok(ManufacturerId(row.try_get("manufacturer_id")?)))
}

pub(crate) async fn update(
	db: &SqlitePool,
	manufacturer_id: ManufacturerId,
	data: &UpdateManufacturerData,
) -> TpResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE manufacturers SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "name", &data.name, |v| v.as_ref());
	has_updates = push_patch!(query, has_updates, "country", &data.country, |v| v.as_ref());

	if !has_updates {
		return Ok(());
	}

	query.push(" WHERE manufacturer_id=").push_bind(manufacturer_id.0);

	let res =
		query.build().execute(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, manufacturer_id: ManufacturerId) -> TpResult<()> {
	let res = sqlx::query("DELETE FROM manufacturers WHERE manufacturer_id=?")
		.bind(manufacturer_id.0)
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
