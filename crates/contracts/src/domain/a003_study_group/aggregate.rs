use crate::domain::common::{Identifier, ResourceItem};
use serde::{Deserialize, Serialize};

/// Учебная группа: студенты и учебные планы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroupDetail {
    pub name: String,
    #[serde(default)]
    pub curriculums: Vec<ResourceItem>,
    #[serde(default)]
    pub students: Vec<StudyGroupStudent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroupStudent {
    pub person_id: Identifier,
    pub full_name: String,
}

impl StudyGroupDetail {
    /// Students as a person collection, for the nested `persons` panel.
    pub fn student_items(&self) -> Vec<ResourceItem> {
        self.students
            .iter()
            .map(|s| ResourceItem::new(s.person_id.clone(), s.full_name.clone()))
            .collect()
    }
}
