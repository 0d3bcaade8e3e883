use axum::{Router, middleware, routing::{delete, get, patch, post}};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::car;
use crate::core::app::App;
use crate::core::route_auth::require_auth;
use crate::driver;
use crate::manufacturer;

pub fn init(app: App) -> Router {
	let protected_router = Router::new()
		// Drivers
		.route("/api/driver", get(driver::handler::list_drivers))
		.route("/api/driver", post(driver::handler::post_driver))
		.route("/api/driver/{driver_id}", get(driver::handler::get_driver))
		.route("/api/driver/{driver_id}", delete(driver::handler::delete_driver))
		.route("/api/driver/{driver_id}/license", patch(driver::handler::patch_driver_license))
		// Cars
		.route("/api/car", get(car::handler::list_cars))
		.route("/api/car", post(car::handler::post_car))
		.route("/api/car/{car_id}", get(car::handler::get_car))
		.route("/api/car/{car_id}", patch(car::handler::patch_car))
		.route("/api/car/{car_id}", delete(car::handler::delete_car))
		.route("/api/car/{car_id}/driver/{driver_id}", post(car::handler::post_car_driver))
		.route("/api/car/{car_id}/driver/{driver_id}", delete(car::handler::delete_car_driver))
		// Manufacturers
		.route("/api/manufacturer", get(manufacturer::handler::list_manufacturers))
		.route("/api/manufacturer", post(manufacturer::handler::post_manufacturer))
		.route("/api/manufacturer/{manufacturer_id}", get(manufacturer::handler::get_manufacturer))
		.route("/api/manufacturer/{manufacturer_id}", patch(manufacturer::handler::patch_manufacturer))
		.route("/api/manufacturer/{manufacturer_id}", delete(manufacturer::handler::delete_manufacturer))
		.layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let public_router = Router::new()
		.route("/api/auth/login", post(auth::handler::post_login));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
