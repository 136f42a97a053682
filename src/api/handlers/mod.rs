//! API handlers for Aliro.

pub mod auth;
pub mod health;
pub mod root;
