//! Common test utilities and helpers
//!
//! - In-memory user store and test server construction
//! - Postgres fixtures for the ignored database tests

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
