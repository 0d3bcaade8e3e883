//! App state type

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;

use taxipark_types::auth_adapter::AuthAdapter;
use taxipark_types::fleet_adapter::FleetAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub auth_adapter: Arc<dyn AuthAdapter>,
	pub fleet_adapter: Arc<dyn FleetAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub auth_adapter: Option<Arc<dyn AuthAdapter>>,
	pub fleet_adapter: Option<Arc<dyn FleetAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
			},
			adapters: Adapters {
				auth_adapter: None,
				fleet_adapter: None,
			},
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }

	// Adapters
	pub fn auth_adapter(&mut self, auth_adapter: Arc<dyn AuthAdapter>) -> &mut Self { self.adapters.auth_adapter = Some(auth_adapter); self }
	pub fn fleet_adapter(&mut self, fleet_adapter: Arc<dyn FleetAdapter>) -> &mut Self { self.adapters.fleet_adapter = Some(fleet_adapter); self }

	pub fn build(&mut self) -> TpResult<App> {
		let auth_adapter = self
			.adapters
			.auth_adapter
			.take()
			.ok_or(Error::Internal("no auth adapter configured".into()))?;
		let fleet_adapter = self
			.adapters
			.fleet_adapter
			.take()
			.ok_or(Error::Internal("no fleet adapter configured".into()))?;

		Ok(Arc::new(AppState {
			opts: AppBuilderOpts {
				listen: self.opts.listen.clone(),
			},
			auth_adapter,
			fleet_adapter,
		}))
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

pub async fn run(app: App) -> TpResult<()> {
	info!("Taxipark v{}", VERSION);

	let router = routes::init(app.clone());
	let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
	info!("Listening on {}", app.opts.listen);
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
