//! End-to-end API tests running the router in-process.

use axum::{
	body::Body,
	http::{header, Request, StatusCode},
	Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use taxipark::{routes, App, AppBuilder};
use taxipark_auth_adapter_sqlite::AuthAdapterSqlite;
use taxipark_fleet_adapter_sqlite::FleetAdapterSqlite;
use taxipark_types::auth_adapter::AuthAdapter;
use taxipark_types::fleet_adapter::{CreateDriverData, FleetAdapter};
use taxipark_types::worker::WorkerPool;

async fn test_app() -> (App, Router, TempDir) {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let worker = Arc::new(WorkerPool::new(1));
	let fleet_adapter = Arc::new(
		FleetAdapterSqlite::new(dir.path().join("fleet.db"))
			.await
			.expect("Failed to create fleet adapter"),
	);
	let auth_adapter = Arc::new(
		AuthAdapterSqlite::new(worker, dir.path().join("auth.db"))
			.await
			.expect("Failed to create auth adapter"),
	);

	let app = AppBuilder::new()
		.fleet_adapter(fleet_adapter)
		.auth_adapter(auth_adapter)
		.build()
		.expect("Failed to build app");
	let router = routes::init(app.clone());

	(app, router, dir)
}

/// Registers credentials and a driver record, returns a bearer token.
async fn seed_login(app: &App) -> String {
	app.auth_adapter
		.create_login("test_user", "password12345")
		.await
		.expect("Failed to create login");
	app.fleet_adapter
		.create_driver(&CreateDriverData {
			username: "test_user",
			first_name: "Test",
			last_name: "User",
			license_number: "TST12345",
		})
		.await
		.expect("Failed to create driver");

	let auth = app
		.auth_adapter
		.check_password("test_user", "password12345")
		.await
		.expect("Failed to log in");
	auth.token.to_string()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
	let builder = Request::builder().method("GET").uri(uri);
	let builder = match token {
		Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
		None => builder,
	};
	builder.body(Body::empty()).expect("Failed to build request")
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
	let builder = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json");
	let builder = match token {
		Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
		None => builder,
	};
	builder
		.body(Body::from(body.to_string()))
		.expect("Failed to build request")
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = response
		.into_body()
		.collect()
		.await
		.expect("Failed to read body")
		.to_bytes();
	serde_json::from_slice(&bytes).expect("Failed to parse body")
}

// Access control //
//****************//

#[tokio::test]
async fn test_driver_routes_require_login() {
	let (_app, router, _dir) = test_app().await;

	for request in [
		get("/api/driver", None),
		get("/api/driver/1", None),
		send_json("PATCH", "/api/driver/1/license", None, &json!({ "licenseNumber": "ABC12345" })),
		send_json("DELETE", "/api/driver/1", None, &json!({})),
		get("/api/car", None),
		get("/api/manufacturer", None),
	] {
		let response = router.clone().oneshot(request).await.expect("Request failed");
		assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	}
}

#[tokio::test]
async fn test_garbage_token_rejected() {
	let (_app, router, _dir) = test_app().await;

	let response = router
		.clone()
		.oneshot(get("/api/driver", Some("not.a.token")))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_returns_token() {
	let (app, router, _dir) = test_app().await;
	seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/auth/login",
			None,
			&json!({ "username": "test_user", "password": "password12345" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["username"], "test_user");
	assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
	let (app, router, _dir) = test_app().await;
	seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/auth/login",
			None,
			&json!({ "username": "test_user", "password": "wrong" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// Drivers //
//*********//

#[tokio::test]
async fn test_retrieve_drivers() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	for username in ["johnsmith", "tylerderden"] {
		app.fleet_adapter
			.create_driver(&CreateDriverData {
				username,
				first_name: "",
				last_name: "",
				license_number: "ABC12345",
			})
			.await
			.expect("Failed to create driver");
	}

	let response = router
		.clone()
		.oneshot(get("/api/driver", Some(&token)))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	let usernames: Vec<&str> = body
		.as_array()
		.expect("Expected a list")
		.iter()
		.filter_map(|d| d["username"].as_str())
		.collect();
	assert_eq!(usernames, ["johnsmith", "test_user", "tylerderden"]);
}

#[tokio::test]
async fn test_driver_search_by_username() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	for username in ["johnsmith", "tylerderden", "tyleranderson"] {
		app.fleet_adapter
			.create_driver(&CreateDriverData {
				username,
				first_name: "",
				last_name: "",
				license_number: "ABC12345",
			})
			.await
			.expect("Failed to create driver");
	}

	let response = router
		.clone()
		.oneshot(get("/api/driver?username=TYLER", Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	let usernames: Vec<&str> = body
		.as_array()
		.expect("Expected a list")
		.iter()
		.filter_map(|d| d["username"].as_str())
		.collect();
	assert_eq!(usernames, ["tyleranderson", "tylerderden"]);
}

#[tokio::test]
async fn test_create_driver() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/driver",
			Some(&token),
			&json!({
				"username": "new_user",
				"password1": "user12345",
				"password2": "user12345",
				"firstName": "Test",
				"lastName": "User",
				"licenseNumber": "DFK12345",
			}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::CREATED);

	let body = body_json(response).await;
	assert_eq!(body["username"], "new_user");
	assert_eq!(body["licenseNumber"], "DFK12345");
	assert_eq!(body["firstName"], "Test");

	// The new account can log in
	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/auth/login",
			None,
			&json!({ "username": "new_user", "password": "user12345" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_driver_with_taken_username() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let payload = json!({
		"username": "new_user",
		"password1": "user12345",
		"password2": "user12345",
		"licenseNumber": "DFK12345",
	});

	let response = router
		.clone()
		.oneshot(send_json("POST", "/api/driver", Some(&token), &payload))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::CREATED);

	// The same username again lands in the field errors, not a 500
	let response = router
		.clone()
		.oneshot(send_json("POST", "/api/driver", Some(&token), &payload))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["errors"]["username"][0], "A driver with that username already exists");

	// Only the first record was persisted
	let response = router
		.clone()
		.oneshot(get("/api/driver?username=new_user", Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	assert_eq!(body.as_array().expect("Expected a list").len(), 1);
}

#[tokio::test]
async fn test_create_driver_with_invalid_license() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/driver",
			Some(&token),
			&json!({
				"username": "new_user",
				"password1": "user12345",
				"password2": "user12345",
				"licenseNumber": "ab12345",
			}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(
		body["errors"]["licenseNumber"][0],
		"License number should consist of 8 characters"
	);

	// Nothing was persisted
	let response = router
		.clone()
		.oneshot(get("/api/driver?username=new_user", Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	assert_eq!(body.as_array().expect("Expected a list").len(), 0);
}

#[tokio::test]
async fn test_create_driver_with_mismatched_passwords() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/driver",
			Some(&token),
			&json!({
				"username": "new_user",
				"password1": "user12345",
				"password2": "other12345",
				"licenseNumber": "DFK12345",
			}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["errors"]["password2"][0], "The two password fields didn't match");
}

#[tokio::test]
async fn test_update_driver_license() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let driver_id = app
		.fleet_adapter
		.create_driver(&CreateDriverData {
			username: "licensed",
			first_name: "",
			last_name: "",
			license_number: "OLD12345",
		})
		.await
		.expect("Failed to create driver");

	// Invalid number is rejected, record untouched
	let response = router
		.clone()
		.oneshot(send_json(
			"PATCH",
			&format!("/api/driver/{driver_id}/license"),
			Some(&token),
			&json!({ "licenseNumber": "dfk12345" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(
		body["errors"]["licenseNumber"][0],
		"First 3 characters should be uppercase letters"
	);

	let response = router
		.clone()
		.oneshot(get(&format!("/api/driver/{driver_id}"), Some(&token)))
		.await
		.expect("Request failed");
	assert_eq!(body_json(response).await["licenseNumber"], "OLD12345");

	// Valid number is stored
	let response = router
		.clone()
		.oneshot(send_json(
			"PATCH",
			&format!("/api/driver/{driver_id}/license"),
			Some(&token),
			&json!({ "licenseNumber": "DFK12345" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await["licenseNumber"], "DFK12345");
}

#[tokio::test]
async fn test_delete_driver_removes_login() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/driver",
			Some(&token),
			&json!({
				"username": "short_lived",
				"password1": "user12345",
				"password2": "user12345",
				"licenseNumber": "DFK12345",
			}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::CREATED);
	let driver_id = body_json(response).await["driverId"]
		.as_i64()
		.expect("Expected a driver id");

	let response = router
		.clone()
		.oneshot(send_json(
			"DELETE",
			&format!("/api/driver/{driver_id}"),
			Some(&token),
			&json!({}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = router
		.clone()
		.oneshot(get(&format!("/api/driver/{driver_id}"), Some(&token)))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/auth/login",
			None,
			&json!({ "username": "short_lived", "password": "user12345" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// Cars and manufacturers //
//************************//

#[tokio::test]
async fn test_car_lifecycle() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/manufacturer",
			Some(&token),
			&json!({ "name": "test_manufacturer", "country": "test_country" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::CREATED);
	let manufacturer_id = body_json(response).await["manufacturerId"]
		.as_i64()
		.expect("Expected a manufacturer id");

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/car",
			Some(&token),
			&json!({ "model": "test_model", "manufacturerId": manufacturer_id }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::CREATED);
	let body = body_json(response).await;
	assert_eq!(body["model"], "test_model");
	assert_eq!(body["manufacturerName"], "test_manufacturer");
	let car_id = body["carId"].as_i64().expect("Expected a car id");

	// Rename the model
	let response = router
		.clone()
		.oneshot(send_json(
			"PATCH",
			&format!("/api/car/{car_id}"),
			Some(&token),
			&json!({ "model": "updated_model" }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await["model"], "updated_model");

	let response = router
		.clone()
		.oneshot(send_json("DELETE", &format!("/api/car/{car_id}"), Some(&token), &json!({})))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = router
		.clone()
		.oneshot(get(&format!("/api/car/{car_id}"), Some(&token)))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_car_with_unknown_manufacturer() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/car",
			Some(&token),
			&json!({ "model": "test_model", "manufacturerId": 999 }),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_and_unassign_driver() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/manufacturer",
			Some(&token),
			&json!({ "name": "test_manufacturer", "country": "test_country" }),
		))
		.await
		.expect("Request failed");
	let manufacturer_id = body_json(response).await["manufacturerId"]
		.as_i64()
		.expect("Expected a manufacturer id");

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			"/api/car",
			Some(&token),
			&json!({ "model": "test_model", "manufacturerId": manufacturer_id }),
		))
		.await
		.expect("Request failed");
	let car_id = body_json(response).await["carId"].as_i64().expect("Expected a car id");

	let driver_id = app
		.fleet_adapter
		.create_driver(&CreateDriverData {
			username: "assigned",
			first_name: "",
			last_name: "",
			license_number: "ABC12345",
		})
		.await
		.expect("Failed to create driver");

	let response = router
		.clone()
		.oneshot(send_json(
			"POST",
			&format!("/api/car/{car_id}/driver/{driver_id}"),
			Some(&token),
			&json!({}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = router
		.clone()
		.oneshot(get(&format!("/api/car/{car_id}"), Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	assert_eq!(body["drivers"][0]["username"], "assigned");

	let response = router
		.clone()
		.oneshot(send_json(
			"DELETE",
			&format!("/api/car/{car_id}/driver/{driver_id}"),
			Some(&token),
			&json!({}),
		))
		.await
		.expect("Request failed");
	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = router
		.clone()
		.oneshot(get(&format!("/api/car/{car_id}"), Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	assert_eq!(body["drivers"].as_array().expect("Expected a list").len(), 0);
}

#[tokio::test]
async fn test_manufacturer_search_by_name() {
	let (app, router, _dir) = test_app().await;
	let token = seed_login(&app).await;

	for name in ["manufacturer1", "manufacturerr2", "manufacturerr3"] {
		let response = router
			.clone()
			.oneshot(send_json(
				"POST",
				"/api/manufacturer",
				Some(&token),
				&json!({ "name": name, "country": "test_country" }),
			))
			.await
			.expect("Request failed");
		assert_eq!(response.status(), StatusCode::CREATED);
	}

	let response = router
		.clone()
		.oneshot(get("/api/manufacturer?name=RR", Some(&token)))
		.await
		.expect("Request failed");
	let body = body_json(response).await;
	let names: Vec<&str> = body
		.as_array()
		.expect("Expected a list")
		.iter()
		.filter_map(|m| m["name"].as_str())
		.collect();
	assert_eq!(names, ["manufacturerr2", "manufacturerr3"]);
}

// vim: ts=4
