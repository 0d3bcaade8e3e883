use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Deserialize;

use taxipark_types::extract::Auth;
use taxipark_types::fleet_adapter::{
	CreateManufacturerData, ListManufacturerOptions, Manufacturer, UpdateManufacturerData,
};

use crate::prelude::*;
use crate::types::FormErrors;

/// # GET /api/manufacturer
#[derive(Deserialize)]
pub struct ManufacturerSearchQuery {
	name: Option<String>,
}

pub async fn list_manufacturers(
	State(app): State<App>,
	Auth(_auth): Auth,
	Query(query): Query<ManufacturerSearchQuery>,
) -> TpResult<(StatusCode, Json<Vec<Manufacturer>>)> {
	let opts = ListManufacturerOptions {
		q: query.name.map(Into::into),
	};
	let manufacturers = app.fleet_adapter.list_manufacturers(&opts).await?;

	Ok((StatusCode::OK, Json(manufacturers)))
}

/// # GET /api/manufacturer/{manufacturer_id}
pub async fn get_manufacturer(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(manufacturer_id): Path<i64>,
) -> TpResult<(StatusCode, Json<Manufacturer>)> {
	let manufacturer = app
		.fleet_adapter
		.read_manufacturer(ManufacturerId(manufacturer_id))
		.await?;

	Ok((StatusCode::OK, Json(manufacturer)))
}

/// # POST /api/manufacturer
#[derive(Deserialize)]
pub struct CreateManufacturerReq {
	name: String,
	country: String,
}

pub async fn post_manufacturer(
	State(app): State<App>,
	Auth(_auth): Auth,
	Json(req): Json<CreateManufacturerReq>,
) -> TpResult<Response> {
	let mut errors = FormErrors::default();
	if req.name.trim().is_empty() {
		errors.add("name", "This field is required");
	}
	if req.country.trim().is_empty() {
		errors.add("country", "This field is required");
	}
	if !errors.is_empty() {
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	let data = CreateManufacturerData {
		name: &req.name,
		country: &req.country,
	};
	let manufacturer_id = app.fleet_adapter.create_manufacturer(&data).await?;
	info!("Created manufacturer {} ({})", manufacturer_id, req.name);

	let manufacturer = app.fleet_adapter.read_manufacturer(manufacturer_id).await?;
	Ok((StatusCode::CREATED, Json(manufacturer)).into_response())
}

/// # PATCH /api/manufacturer/{manufacturer_id}
#[derive(Deserialize)]
pub struct UpdateManufacturerReq {
	#[serde(default)]
	name: Patch<String>,
	#[serde(default)]
	country: Patch<String>,
}

pub async fn patch_manufacturer(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(manufacturer_id): Path<i64>,
	Json(req): Json<UpdateManufacturerReq>,
) -> TpResult<Response> {
	// Both columns are non-nullable
	let mut errors = FormErrors::default();
	if matches!(req.name, Patch::Null) {
		errors.add("name", "This field is required");
	}
	if matches!(req.country, Patch::Null) {
		errors.add("country", "This field is required");
	}
	if !errors.is_empty() {
		return Ok((StatusCode::OK, Json(errors)).into_response());
	}

	let manufacturer_id = ManufacturerId(manufacturer_id);
	let data = UpdateManufacturerData {
		name: req.name.map(Into::into),
		country: req.country.map(Into::into),
	};
	app.fleet_adapter.update_manufacturer(manufacturer_id, &data).await?;

	let manufacturer = app.fleet_adapter.read_manufacturer(manufacturer_id).await?;
	Ok((StatusCode::OK, Json(manufacturer)).into_response())
}

/// # DELETE /api/manufacturer/{manufacturer_id}
pub async fn delete_manufacturer(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(manufacturer_id): Path<i64>,
) -> TpResult<StatusCode> {
	app.fleet_adapter.delete_manufacturer(ManufacturerId(manufacturer_id)).await?;

	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
