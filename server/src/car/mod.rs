//! Car registry endpoints.

pub mod handler;

// vim: ts=4
