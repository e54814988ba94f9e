//! Shared utilities and common types for the Wildfire Watch backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic (coordinates, required text fields)

pub mod validation;
