//! Slot list configuration

use crate::error::{SlotError, SlotResult};
use serde::{Deserialize, Serialize};

/// Slot count of a plain slot list
pub const BASE_SLOT_COUNT: usize = 10;

/// Slot count of a player inventory
pub const INVENTORY_SLOT_COUNT: usize = 40;

/// Construction parameters for a slot list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotListConfig {
    /// Number of slots, fixed for the lifetime of the list
    pub max_count: usize,
    /// Name used in log output
    pub label: String,
}

impl SlotListConfig {
    /// Create a config with the given slot count
    pub fn new(max_count: usize) -> Self {
        Self {
            max_count,
            ..Default::default()
        }
    }

    /// Config for a player inventory
    pub fn inventory() -> Self {
        Self {
            max_count: INVENTORY_SLOT_COUNT,
            label: "inventory".to_string(),
        }
    }

    /// Set slot count
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Set log label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SlotResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SlotError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config can build a list
    pub fn validate(&self) -> SlotResult<()> {
        if self.max_count == 0 {
            return Err(SlotError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for SlotListConfig {
    fn default() -> Self {
        Self {
            max_count: BASE_SLOT_COUNT,
            label: "slots".to_string(),
        }
    }
}
