//! Taxipark is a fleet management service for taxi companies.
//!
//! # Features
//!
//! - Driver registry
//!		- account creation with license number validation
//!		- license number updates
//!		- case-insensitive username search
//!	- Car registry
//!		- manufacturer catalogue
//!		- driver assignments
//!		- model and manufacturer name search
//!	- Token based authentication
//!		- every fleet endpoint requires a logged-in driver

#![forbid(unsafe_code)]

pub mod core;
pub mod auth;
pub mod car;
pub mod driver;
pub mod manufacturer;
pub mod prelude;
pub mod routes;
pub mod types;

pub use crate::core::app::{App, AppBuilder, run};

// vim: ts=4
