use crate::domain::common::{Identifier, ResourceItem};
use serde::{Deserialize, Serialize};

/// Учебный план: группы, которые по нему учатся, и дисциплины по семестрам
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDetail {
    pub name: String,
    #[serde(default)]
    pub study_groups: Vec<ResourceItem>,
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub value: u32,
    #[serde(default)]
    pub modules: Vec<CurriculumModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumModule {
    pub discipline_name: String,
    pub department_name: String,
    pub department_id: Identifier,
}
