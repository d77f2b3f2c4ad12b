//! Request handlers.

pub mod folder;
pub mod health;
