//! HTTP route modules

pub mod ai;
pub mod health;
