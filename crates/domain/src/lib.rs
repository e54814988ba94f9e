//! Domain layer for the Wildfire Watch backend.
//!
//! This crate contains:
//! - Domain models (WildfireReport, Notification)
//! - Pure business logic services (notification derivation, map projection)

pub mod models;
pub mod services;
