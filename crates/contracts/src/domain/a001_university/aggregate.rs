use serde::{Deserialize, Serialize};

/// Университет (`GET /universities/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityDetail {
    pub name: String,
}
