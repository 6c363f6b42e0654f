//! Domain entities - Core business objects with identity

mod creature;
mod zone;

pub use creature::Creature;
pub use zone::Zone;
