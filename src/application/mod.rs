//! Application layer - Use cases behind ports

pub mod ports;
pub mod services;
