//! Manufacturer catalogue endpoints.

pub mod handler;

// vim: ts=4
