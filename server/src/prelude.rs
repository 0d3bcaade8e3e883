pub use crate::core::app::App;
pub use taxipark_types::auth_adapter::AuthAdapter;
pub use taxipark_types::error::{Error, TpResult};
pub use taxipark_types::fleet_adapter::FleetAdapter;
pub use taxipark_types::types::{CarId, DriverId, ManufacturerId, Patch, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
