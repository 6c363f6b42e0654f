//! Zone entity - Named enclosures housing creatures

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ZoneId;

/// An enclosure in the zoo
///
/// Creatures reference the zone that houses them; the set of creatures in a
/// zone is derived by reverse lookup, never stored on the zone itself. A zone
/// holding one or more creatures cannot be deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub description: String,
    /// Maximum number of creatures the enclosure can house
    pub capacity: u32,
}

impl Zone {
    pub fn new(name: impl Into<String>, description: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: ZoneId::new(),
            name: name.into(),
            description: description.into(),
            capacity,
        }
    }
}
