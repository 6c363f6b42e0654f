//! Health status value object
//!
//! Free-text status reported by zookeepers ("healthy", "stable", "injured"...).
//! The single reserved value is "critical", which blocks deletion of the
//! creature carrying it. The comparison ignores case.

use serde::{Deserialize, Serialize};

/// Reserved status value that gates creature deletion
const CRITICAL: &str = "critical";

/// A creature's reported health status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(String);

impl HealthStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this status is the reserved "critical" value (case-insensitive)
    pub fn is_critical(&self) -> bool {
        self.0.eq_ignore_ascii_case(CRITICAL)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for HealthStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl From<&str> for HealthStatus {
    fn from(status: &str) -> Self {
        Self(status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_check_ignores_case() {
        assert!(HealthStatus::new("critical").is_critical());
        assert!(HealthStatus::new("CRITICAL").is_critical());
        assert!(HealthStatus::new("Critical").is_critical());
    }

    #[test]
    fn other_statuses_are_not_critical() {
        assert!(!HealthStatus::new("stable").is_critical());
        assert!(!HealthStatus::new("healthy").is_critical());
        assert!(!HealthStatus::new("critically injured").is_critical());
    }
}
