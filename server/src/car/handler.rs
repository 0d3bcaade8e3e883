use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};

use taxipark_types::extract::Auth;
use taxipark_types::fleet_adapter::{Car, CreateCarData, Driver, ListCarOptions, UpdateCarData};

use crate::prelude::*;
use crate::types::FormErrors;

/// # GET /api/car
#[derive(Deserialize)]
pub struct CarSearchQuery {
	model: Option<String>,
}

pub async fn list_cars(
	State(app): State<App>,
	Auth(_auth): Auth,
	Query(query): Query<CarSearchQuery>,
) -> TpResult<(StatusCode, Json<Vec<Car>>)> {
	let opts = ListCarOptions {
		q: query.model.map(Into::into),
	};
	let cars = app.fleet_adapter.list_cars(&opts).await?;

	Ok((StatusCode::OK, Json(cars)))
}

/// # GET /api/car/{car_id}
#[derive(Serialize)]
pub struct CarDetail {
	#[serde(flatten)]
	pub car: Car,
	/// Drivers currently assigned to the car.
	pub drivers: Vec<Driver>,
}

pub async fn get_car(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(car_id): Path<i64>,
) -> TpResult<(StatusCode, Json<CarDetail>)> {
	let car_id = CarId(car_id);
	let car = app.fleet_adapter.read_car(car_id).await?;
	let drivers = app.fleet_adapter.list_car_drivers(car_id).await?;

	Ok((StatusCode::OK, Json(CarDetail { car, drivers })))
}

/// # POST /api/car
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarReq {
	model: String,
	manufacturer_id: i64,
}

pub async fn post_car(
	State(app): State<App>,
	Auth(_auth): Auth,
	Json(req): Json<CreateCarReq>,
) -> TpResult<Response> {
	if req.model.trim().is_empty() {
		let mut errors = FormErrors::default();
		errors.add("model", "This field is required");
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	let data = CreateCarData {
		model: &req.model,
		manufacturer_id: ManufacturerId(req.manufacturer_id),
	};
	let car_id = app.fleet_adapter.create_car(&data).await?;
	info!("Created car {} ({})", car_id, req.model);

	let car = app.fleet_adapter.read_car(car_id).await?;
	Ok((StatusCode::CREATED, Json(car)).into_response())
}

/// # PATCH /api/car/{car_id}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarReq {
	#[serde(default)]
	model: Patch<String>,
	#[serde(default)]
	manufacturer_id: Patch<i64>,
}

pub async fn patch_car(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(car_id): Path<i64>,
	Json(req): Json<UpdateCarReq>,
) -> TpResult<Response> {
	// Both columns are non-nullable
	let mut errors = FormErrors::default();
	if matches!(req.model, Patch::Null) {
		errors.add("model", "This field is required");
	}
	if matches!(req.manufacturer_id, Patch::Null) {
		errors.add("manufacturerId", "This field is required");
	}
	if !errors.is_empty() {
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	let car_id = CarId(car_id);
	let data = UpdateCarData {
		model: req.model.map(Into::into),
		manufacturer_id: req.manufacturer_id.map(ManufacturerId),
	};
	app.fleet_adapter.update_car(car_id, &data).await?;

	let car = app.fleet_adapter.read_car(car_id).await?;
	Ok((StatusCode::OK, Json(car)).into_response())
}

/// # DELETE /api/car/{car_id}
pub async fn delete_car(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(car_id): Path<i64>,
) -> TpResult<StatusCode> {
	app.fleet_adapter.delete_car(CarId(car_id)).await?;

	Ok(StatusCode::NO_CONTENT)
}

/// # POST /api/car/{car_id}/driver/{driver_id}
pub async fn post_car_driver(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path((car_id, driver_id)): Path<(i64, i64)>,
) -> TpResult<StatusCode> {
	app.fleet_adapter.assign_driver(CarId(car_id), DriverId(driver_id)).await?;

	Ok(StatusCode::NO_CONTENT)
}

/// # DELETE /api/car/{car_id}/driver/{driver_id}
pub async fn delete_car_driver(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path((car_id, driver_id)): Path<(i64, i64)>,
) -> TpResult<StatusCode> {
	app.fleet_adapter.unassign_driver(CarId(car_id), DriverId(driver_id)).await?;

	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
