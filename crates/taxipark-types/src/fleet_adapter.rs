//! Adapter that stores and queries the fleet registry: drivers, cars, and
//! manufacturers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::error::TpResult;
use crate::types::{CarId, DriverId, ManufacturerId, Patch, Timestamp};

// Manufacturer //
//**************//

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
	pub manufacturer_id: ManufacturerId,
	pub name: Box<str>,
	pub country: Box<str>,
	pub created_at: Timestamp,
}

impl std::fmt::Display for Manufacturer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.name, self.country)
	}
}

#[derive(Debug)]
pub struct CreateManufacturerData<'a> {
	pub name: &'a str,
	pub country: &'a str,
}

#[derive(Debug, Default)]
pub struct UpdateManufacturerData {
	pub name: Patch<Box<str>>,
	pub country: Patch<Box<str>>,
}

#[derive(Debug, Default)]
pub struct ListManufacturerOptions {
	/// Case-insensitive substring filter on the manufacturer name.
	pub q: Option<Box<str>>,
}

// Car //
//*****//

#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
	pub car_id: CarId,
	pub model: Box<str>,
	pub manufacturer_id: ManufacturerId,
	/// Joined from the manufacturers table on reads.
	pub manufacturer_name: Option<Box<str>>,
	pub created_at: Timestamp,
}

impl std::fmt::Display for Car {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.model)
	}
}

#[derive(Debug)]
pub struct CreateCarData<'a> {
	pub model: &'a str,
	pub manufacturer_id: ManufacturerId,
}

#[derive(Debug, Default)]
pub struct UpdateCarData {
	pub model: Patch<Box<str>>,
	pub manufacturer_id: Patch<ManufacturerId>,
}

#[derive(Debug, Default)]
pub struct ListCarOptions {
	/// Case-insensitive substring filter on the car model.
	pub q: Option<Box<str>>,
}

// Driver //
//********//

/// A driver is a user account; credentials live behind the auth adapter,
/// this is the fleet-side record.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
	pub driver_id: DriverId,
	pub username: Box<str>,
	pub first_name: Box<str>,
	pub last_name: Box<str>,
	pub license_number: Box<str>,
	pub created_at: Timestamp,
}

impl std::fmt::Display for Driver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({} {})", self.username, self.first_name, self.last_name)
	}
}

#[derive(Debug)]
pub struct CreateDriverData<'a> {
	pub username: &'a str,
	pub first_name: &'a str,
	pub last_name: &'a str,
	pub license_number: &'a str,
}

#[derive(Debug, Default)]
pub struct ListDriverOptions {
	/// Case-insensitive substring filter on the username.
	pub q: Option<Box<str>>,
}

// Adapter trait //
//***************//

#[async_trait]
pub trait FleetAdapter: Send + Sync {
	// Manufacturer management
	async fn list_manufacturers(
		&self,
		opts: &ListManufacturerOptions,
	) -> TpResult<Vec<Manufacturer>>;
	async fn read_manufacturer(&self, manufacturer_id: ManufacturerId) -> TpResult<Manufacturer>;
	async fn create_manufacturer(
		&self,
		data: &CreateManufacturerData<'_>,
	) -> TpResult<ManufacturerId>;
	async fn update_manufacturer(
		&self,
		manufacturer_id: ManufacturerId,
		data: &UpdateManufacturerData,
	) -> TpResult<()>;
	async fn delete_manufacturer(&self, manufacturer_id: ManufacturerId) -> TpResult<()>;

	// Car management
	async fn list_cars(&self, opts: &ListCarOptions) -> TpResult<Vec<Car>>;
	async fn read_car(&self, car_id: CarId) -> TpResult<Car>;
	async fn create_car(&self, data: &CreateCarData<'_>) -> TpResult<CarId>;
	async fn update_car(&self, car_id: CarId, data: &UpdateCarData) -> TpResult<()>;
	async fn delete_car(&self, car_id: CarId) -> TpResult<()>;

	/// Drivers currently assigned to a car.
	async fn list_car_drivers(&self, car_id: CarId) -> TpResult<Vec<Driver>>;
	async fn assign_driver(&self, car_id: CarId, driver_id: DriverId) -> TpResult<()>;
	async fn unassign_driver(&self, car_id: CarId, driver_id: DriverId) -> TpResult<()>;

	// Driver management
	async fn list_drivers(&self, opts: &ListDriverOptions) -> TpResult<Vec<Driver>>;
	async fn read_driver(&self, driver_id: DriverId) -> TpResult<Driver>;
	/// Exact username lookup (usernames are unique).
	async fn read_driver_by_username(&self, username: &str) -> TpResult<Driver>;
	async fn create_driver(&self, data: &CreateDriverData<'_>) -> TpResult<DriverId>;
	async fn update_driver_license(
		&self,
		driver_id: DriverId,
		license_number: &str,
	) -> TpResult<()>;
	async fn delete_driver(&self, driver_id: DriverId) -> TpResult<()>;
}


// vim: ts=4
