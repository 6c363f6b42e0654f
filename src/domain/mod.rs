//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Zone, Creature
//! - Value Objects: Strongly-typed identifiers, health status

pub mod entities;
pub mod value_objects;
