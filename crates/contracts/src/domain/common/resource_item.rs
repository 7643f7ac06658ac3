use super::Identifier;
use serde::{Deserialize, Serialize};

/// Minimal `{id, name}` record rendered by list panels.
///
/// The university list endpoint names its fields `universityId` /
/// `universityName`; both shapes decode into this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    #[serde(alias = "universityId")]
    pub id: Identifier,
    #[serde(alias = "universityName")]
    pub name: String,
}

impl ResourceItem {
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
