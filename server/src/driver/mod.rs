//! Driver registry endpoints.

pub mod form;
pub mod handler;

// vim: ts=4
