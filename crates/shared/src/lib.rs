//! Shared types and utilities for the serverdeck console.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
