use crate::domain::common::Identifier;
use serde::{Deserialize, Deserializer, Serialize};

/// Физическое лицо и его роли в вузе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetail {
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<PersonRole>,
}

/// A role a person holds, tagged by the `role` field on the wire.
///
/// Anything the client does not recognise decodes to [`PersonRole::Unknown`]
/// and renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum PersonRole {
    #[serde(rename_all = "camelCase")]
    Student {
        study_group_id: Identifier,
        study_group_name: String,
    },
    #[serde(rename_all = "camelCase")]
    Teacher {
        department_id: Identifier,
        department_name: String,
    },
    #[serde(rename_all = "camelCase")]
    SubdivisionMember {
        subdivision_id: Identifier,
        subdivision_name: String,
        #[serde(default)]
        subdivision_role: String,
    },
    #[serde(other)]
    Unknown,
}

/// Decodes each role on its own, so one malformed or untagged entry
/// degrades to `Unknown` instead of failing the whole record.
fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<PersonRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or(PersonRole::Unknown))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_known_roles() {
        let person: PersonDetail = serde_json::from_str(
            r#"{
                "fullName": "danil churickov igorevich",
                "roles": [
                    {"role": "student", "studyGroupId": 0, "studyGroupName": "avt-113"},
                    {"role": "teacher", "departmentId": 0, "departmentName": "asu"},
                    {"role": "subdivisionMember", "subdivisionId": 3, "subdivisionName": "avtf", "subdivisionRole": "dean"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            person.roles,
            vec![
                PersonRole::Student {
                    study_group_id: Identifier::from("0"),
                    study_group_name: "avt-113".into(),
                },
                PersonRole::Teacher {
                    department_id: Identifier::from("0"),
                    department_name: "asu".into(),
                },
                PersonRole::SubdivisionMember {
                    subdivision_id: Identifier::from("3"),
                    subdivision_name: "avtf".into(),
                    subdivision_role: "dean".into(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_roles_do_not_affect_siblings() {
        let person: PersonDetail = serde_json::from_str(
            r#"{
                "fullName": "artem pronko",
                "roles": [
                    {"role": "rector", "office": 1},
                    {"role": "student", "studyGroupId": 2, "studyGroupName": "avt-114"},
                    {"studyGroupId": 2},
                    {"role": "teacher"},
                    "garbage"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(person.roles.len(), 5);
        let known: Vec<_> = person.roles.iter().filter(|r| **r != PersonRole::Unknown).collect();
        assert_eq!(
            known,
            vec![&PersonRole::Student {
                study_group_id: Identifier::from("2"),
                study_group_name: "avt-114".into(),
            }]
        );
    }

    #[test]
    fn test_missing_roles() {
        let person: PersonDetail = serde_json::from_str(r#"{"fullName": "x"}"#).unwrap();
        assert!(person.roles.is_empty());
    }
}
