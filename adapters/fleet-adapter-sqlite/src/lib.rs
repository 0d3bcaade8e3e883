//! SQLite implementation of the taxipark fleet adapter.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use taxipark::fleet_adapter::{
	Car, CreateCarData, CreateDriverData, CreateManufacturerData, Driver, FleetAdapter,
	ListCarOptions, ListDriverOptions, ListManufacturerOptions, Manufacturer, UpdateCarData,
	UpdateManufacturerData,
};
use taxipark::prelude::*;

mod car;
mod driver;
mod manufacturer;
mod schema;
mod utils;

#[derive(Debug)]
pub struct FleetAdapterSqlite {
	db: SqlitePool,
}

impl FleetAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> TpResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.foreign_keys(true)
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

		Ok(Self { db })
	}
}

#[async_trait]
impl FleetAdapter for FleetAdapterSqlite {
	// Manufacturer management
	//*************************
	async fn list_manufacturers(
		&self,
		opts: &ListManufacturerOptions,
	) -> TpResult<Vec<Manufacturer>> {
		manufacturer::list(&self.db, opts).await
	}

	async fn read_manufacturer(&self, manufacturer_id: ManufacturerId) -> TpResult<Manufacturer> {
		manufacturer::read(&self.db, manufacturer_id).await
	}

	async fn create_manufacturer(
		&self,
		data: &CreateManufacturerData<'_>,
	) -> TpResult<ManufacturerId> {
		manufacturer::create(&self.db, data).await
	}

	async fn update_manufacturer(
		&self,
		manufacturer_id: ManufacturerId,
		data: &UpdateManufacturerData,
	) -> TpResult<()> {
		manufacturer::update(&self.db, manufacturer_id, data).await
	}

	async fn delete_manufacturer(&self, manufacturer_id: ManufacturerId) -> TpResult<()> {
		manufacturer::delete(&self.db, manufacturer_id).await
	}

	// Car management
	//****************
	async fn list_cars(&self, opts: &ListCarOptions) -> TpResult<Vec<Car>> {
		car::list(&self.db, opts).await
	}

	async fn read_car(&self, car_id: CarId) -> TpResult<Car> {
		car::read(&self.db, car_id).await
	}

	async fn create_car(&self, data: &CreateCarData<'_>) -> TpResult<CarId> {
		car::create(&self.db, data).await
	}

	async fn update_car(&self, car_id: CarId, data: &UpdateCarData) -> TpResult<()> {
		car::update(&self.db, car_id, data).await
	}

	async fn delete_car(&self, car_id: CarId) -> TpResult<()> {
		car::delete(&self.db, car_id).await
	}

	async fn list_car_drivers(&self, car_id: CarId) -> TpResult<Vec<Driver>> {
		car::list_drivers(&self.db, car_id).await
	}

	async fn assign_driver(&self, car_id: CarId, driver_id: DriverId) -> TpResult<()> {
		car::assign_driver(&self.db, car_id, driver_id).await
	}

	async fn unassign_driver(&self, car_id: CarId, driver_id: DriverId) -> TpResult<()> {
		car::unassign_driver(&self.db, car_id, driver_id).await
	}

	// Driver management
	//*******************
	async fn list_drivers(&self, opts: &ListDriverOptions) -> TpResult<Vec<Driver>> {
		driver::list(&self.db, opts).await
	}

	async fn read_driver(&self, driver_id: DriverId) -> TpResult<Driver> {
		driver::read(&self.db, driver_id).await
	}

	async fn read_driver_by_username(&self, username: &str) -> TpResult<Driver> {
		driver::read_by_username(&self.db, username).await
	}

	async fn create_driver(&self, data: &CreateDriverData<'_>) -> TpResult<DriverId> {
		driver::create(&self.db, data).await
	}

	async fn update_driver_license(
		&self,
		driver_id: DriverId,
		license_number: &str,
	) -> TpResult<()> {
		driver::update_license(&self.db, driver_id, license_number).await
	}

	async fn delete_driver(&self, driver_id: DriverId) -> TpResult<()> {
		driver::delete(&self.db, driver_id).await
	}
}

// vim: ts=4
