//! Shared types, adapter traits, and validation rules for the taxipark
//! fleet service.
//!
//! This crate contains the foundational types shared between the server
//! crate and the adapter implementations. Extracting these into a separate
//! crate lets the adapter crates compile in parallel with the server's
//! feature modules.

pub mod auth_adapter;
pub mod error;
pub mod extract;
pub mod fleet_adapter;
pub mod license;
pub mod prelude;
pub mod types;
pub mod worker;

// vim: ts=4
