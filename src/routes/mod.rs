//! Route modules for the Papiro server

pub mod export;
pub mod extract;
pub mod health;
