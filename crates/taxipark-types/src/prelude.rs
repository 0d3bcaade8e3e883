pub use crate::error::{Error, TpResult};
pub use crate::types::{CarId, DriverId, ManufacturerId, Patch, Timestamp, now};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
