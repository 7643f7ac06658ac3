//! Категории справочника внутри вуза.
//!
//! Static configuration of the directory tree: every category knows its
//! route segment, its collection endpoint and which categories can be
//! browsed beneath one of its items.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Subdivisions,
    StudyGroups,
    Curriculums,
    Persons,
}

impl Category {
    /// Tab order of the university view.
    pub const ALL: [Category; 4] = [
        Category::Subdivisions,
        Category::StudyGroups,
        Category::Curriculums,
        Category::Persons,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            Category::Subdivisions => "subdivisions",
            Category::StudyGroups => "study_groups",
            Category::Curriculums => "curriculums",
            Category::Persons => "persons",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.segment() == segment)
    }

    /// Collection endpoint of the directory API, e.g. `/study_groups`.
    pub fn collection_path(self) -> String {
        format!("/{}", self.segment())
    }

    /// Categories whose collection comes from the detail record of an item
    /// of this category and that can be opened beneath it.
    pub fn children(self) -> &'static [Category] {
        match self {
            Category::Curriculums => &[Category::StudyGroups],
            Category::StudyGroups => &[Category::Persons],
            Category::Subdivisions | Category::Persons => &[],
        }
    }

    pub fn has_child(self, child: Category) -> bool {
        self.children().contains(&child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_segment(category.segment()), Some(category));
        }
        assert_eq!(Category::from_segment("faculties"), None);
        assert_eq!(Category::from_segment(""), None);
    }

    #[test]
    fn test_tree() {
        assert!(Category::Curriculums.has_child(Category::StudyGroups));
        assert!(Category::StudyGroups.has_child(Category::Persons));
        assert!(!Category::Persons.has_child(Category::Curriculums));
        assert!(Category::Subdivisions.children().is_empty());
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(Category::StudyGroups.collection_path(), "/study_groups");
    }
}
