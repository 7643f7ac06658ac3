use crate::domain::common::Identifier;
use serde::{Deserialize, Serialize};

/// Подразделение вуза со списком сотрудников
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionDetail {
    pub name: String,
    #[serde(default)]
    pub members: Vec<SubdivisionMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdivisionMember {
    pub person_id: Identifier,
    pub full_name: String,
    #[serde(default)]
    pub role: String,
}

impl SubdivisionMember {
    /// Label shown in the members list: `"<full name> (role <role>)"`.
    pub fn display_label(&self) -> String {
        format!("{} (role {})", self.full_name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_subdivision() {
        let detail: SubdivisionDetail = serde_json::from_str(
            r#"{"name":"asu","members":[{"personId":0,"fullName":"danil churickov","role":"head"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.name, "asu");
        assert_eq!(detail.members[0].person_id.as_str(), "0");
        assert_eq!(detail.members[0].display_label(), "danil churickov (role head)");
    }
}
