//! HTTP route handlers.

pub mod health;
pub mod map;
pub mod notifications;
pub mod reports;
