pub mod app;
pub mod route_auth;

// vim: ts=4
