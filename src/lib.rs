//! Activity Tracker Frontend
//!
//! Browser client for the activity impact tracker API.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod flows;
pub mod form;
pub mod models;
pub mod notify;
pub mod store;
pub mod theme;
pub mod view_model;

pub use app::App;
