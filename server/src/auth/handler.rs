use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// # Login
#[derive(Serialize)]
pub struct Login {
	username: String,
	token: String,
}

/// # POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginReq {
	username: String,
	password: String,
}

pub async fn post_login(
	State(app): State<App>,
	Json(login): Json<LoginReq>,
) -> TpResult<(StatusCode, Json<Login>)> {
	let auth = app.auth_adapter.check_password(&login.username, &login.password).await;

	if let Ok(auth) = auth {
		info!("login: {}", auth.username);
		let login = Login {
			username: auth.username.to_string(),
			token: auth.token.to_string(),
		};
		Ok((StatusCode::OK, Json(login)))
	} else {
		// Slow down brute force attempts
		tokio::time::sleep(std::time::Duration::from_secs(1)).await;
		Err(Error::PermissionDenied)
	}
}

// vim: ts=4
