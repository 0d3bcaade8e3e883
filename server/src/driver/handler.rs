use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Deserialize;

use taxipark_types::extract::Auth;
use taxipark_types::fleet_adapter::{CreateDriverData, Driver, ListDriverOptions};

use crate::driver::form::{DriverCreationForm, DriverLicenseUpdateForm};
use crate::prelude::*;

/// # GET /api/driver
#[derive(Deserialize)]
pub struct DriverSearchQuery {
	username: Option<String>,
}

pub async fn list_drivers(
	State(app): State<App>,
	Auth(_auth): Auth,
	Query(query): Query<DriverSearchQuery>,
) -> TpResult<(StatusCode, Json<Vec<Driver>>)> {
	let opts = ListDriverOptions {
		q: query.username.map(Into::into),
	};
	let drivers = app.fleet_adapter.list_drivers(&opts).await?;

	Ok((StatusCode::OK, Json(drivers)))
}

/// # GET /api/driver/{driver_id}
pub async fn get_driver(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(driver_id): Path<i64>,
) -> TpResult<(StatusCode, Json<Driver>)> {
	let driver = app.fleet_adapter.read_driver(DriverId(driver_id)).await?;

	Ok((StatusCode::OK, Json(driver)))
}

/// # POST /api/driver
pub async fn post_driver(
	State(app): State<App>,
	Auth(_auth): Auth,
	Json(form): Json<DriverCreationForm>,
) -> TpResult<Response> {
	let mut errors = form.validate();
	if app.fleet_adapter.read_driver_by_username(&form.username).await.is_ok() {
		errors.add("username", "A driver with that username already exists");
	}
	if !errors.is_empty() {
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	app.auth_adapter.create_login(&form.username, &form.password1).await?;

	let data = CreateDriverData {
		username: &form.username,
		first_name: &form.first_name,
		last_name: &form.last_name,
		license_number: &form.license_number,
	};
	let driver_id = match app.fleet_adapter.create_driver(&data).await {
		Ok(driver_id) => driver_id,
		Err(err) => {
			// Do not leave credentials behind without a driver record
			if let Err(err) = app.auth_adapter.delete_login(&form.username).await {
				warn!("Failed to remove login for {}: {}", form.username, err);
			}
			return Err(err);
		}
	};
	info!("Created driver {} ({})", driver_id, form.username);

	let driver = app.fleet_adapter.read_driver(driver_id).await?;
	Ok((StatusCode::CREATED, Json(driver)).into_response())
}

/// # PATCH /api/driver/{driver_id}/license
pub async fn patch_driver_license(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(driver_id): Path<i64>,
	Json(form): Json<DriverLicenseUpdateForm>,
) -> TpResult<Response> {
	let errors = form.validate();
	if !errors.is_empty() {
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	let driver_id = DriverId(driver_id);
	app.fleet_adapter.update_driver_license(driver_id, &form.license_number).await?;

	let driver = app.fleet_adapter.read_driver(driver_id).await?;
	Ok((StatusCode::OK, Json(driver)).into_response())
}

/// # DELETE /api/driver/{driver_id}
pub async fn delete_driver(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(driver_id): Path<i64>,
) -> TpResult<StatusCode> {
	let driver = app.fleet_adapter.read_driver(DriverId(driver_id)).await?;
	app.fleet_adapter.delete_driver(driver.driver_id).await?;

	if let Err(err) = app.auth_adapter.delete_login(&driver.username).await {
		warn!("No login to remove for driver {}: {}", driver.username, err);
	}
	info!("Deleted driver {} ({})", driver.driver_id, driver.username);

	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
