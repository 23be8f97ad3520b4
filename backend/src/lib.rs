//! Identity Service Backend Library
//!
//! This library exposes the backend modules for use in tests and other crates.

pub mod auth;
pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
