// ── Guest domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Guest {
    /// Dropdown label: `Name (email)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}
