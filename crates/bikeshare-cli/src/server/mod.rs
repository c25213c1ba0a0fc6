//! HTTP server: JSON API over the dashboard views.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
