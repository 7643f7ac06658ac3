//! Directory route model.
//!
//! The URL is the only source of truth for what is selected: the university
//! view parses `location.pathname` on every navigation and derives the active
//! tab, the selected item of every level and all link targets from it.
//!
//! ```text
//! /universities/{universityId}/{category}/{itemId}/{childCategory}/{childItemId}/...
//! ```

use contracts::domain::common::Identifier;
use contracts::shared::Category;

pub const UNIVERSITIES_PATH: &str = "/universities";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("`{0}` is not a university path")]
    NotDirectory(String),
    #[error("unknown category `{segment}`")]
    UnknownCategory { segment: String, depth: usize },
}

/// One `{category}/{itemId}` pair of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLevel {
    pub category: Category,
    pub item_id: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryRoute {
    pub university_id: Identifier,
    pub levels: Vec<RouteLevel>,
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Appends an identifier to a path as a percent-encoded segment.
pub fn join_segment(base: &str, id: &Identifier) -> String {
    format!("{}/{}", base, urlencoding::encode(id.as_str()))
}

pub fn university_href(university_id: &Identifier) -> String {
    join_segment(UNIVERSITIES_PATH, university_id)
}

/// University id of any `/universities/{id}/...` path, even one whose
/// category segments do not parse.
pub fn university_id_of(pathname: &str) -> Option<Identifier> {
    let mut segments = pathname.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some("universities"), Some(id)) => Some(Identifier::from(decode_segment(id))),
        _ => None,
    }
}

impl DirectoryRoute {
    pub fn parse(pathname: &str) -> Result<Self, RouteError> {
        let university_id = university_id_of(pathname)
            .ok_or_else(|| RouteError::NotDirectory(pathname.to_string()))?;

        let mut segments = pathname
            .split('/')
            .filter(|s| !s.is_empty())
            .skip(2)
            .map(decode_segment);

        let mut levels: Vec<RouteLevel> = Vec::new();
        while let Some(segment) = segments.next() {
            let depth = levels.len();
            let category = Category::from_segment(&segment)
                .filter(|child| match levels.last() {
                    None => true,
                    Some(parent) => parent.category.has_child(*child),
                })
                .ok_or(RouteError::UnknownCategory { segment, depth })?;
            let item_id = segments.next().map(Identifier::from);
            levels.push(RouteLevel { category, item_id });
        }

        Ok(Self {
            university_id,
            levels,
        })
    }

    /// Category of the first level; `None` until a category is in the path.
    pub fn active_tab(&self) -> Option<Category> {
        self.category_at(0)
    }

    pub fn category_at(&self, depth: usize) -> Option<Category> {
        self.levels.get(depth).map(|level| level.category)
    }

    pub fn selected_at(&self, depth: usize) -> Option<&Identifier> {
        self.levels.get(depth).and_then(|level| level.item_id.as_ref())
    }

    pub fn university_href(&self) -> String {
        university_href(&self.university_id)
    }

    pub fn category_href(&self, category: Category) -> String {
        format!("{}/{}", self.university_href(), category.segment())
    }

    /// Path of the list at `depth`: every ancestor pair plus the category
    /// segment of that level.
    pub fn list_href(&self, depth: usize) -> String {
        let mut href = self.university_href();
        for (index, level) in self.levels.iter().take(depth + 1).enumerate() {
            href.push('/');
            href.push_str(level.category.segment());
            if index < depth {
                if let Some(id) = &level.item_id {
                    href = join_segment(&href, id);
                }
            }
        }
        href
    }

    pub fn item_href(&self, depth: usize, id: &Identifier) -> String {
        join_segment(&self.list_href(depth), id)
    }

    /// Cross-reference to an item of a top-level category.
    pub fn top_level_item_href(&self, category: Category, id: &Identifier) -> String {
        join_segment(&self.category_href(category), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> Identifier {
        Identifier::from(value)
    }

    #[test]
    fn test_university_without_category() {
        let route = DirectoryRoute::parse("/universities/5").unwrap();
        assert_eq!(route.university_id, id("5"));
        assert!(route.levels.is_empty());
        assert_eq!(route.active_tab(), None);
        assert_eq!(route.selected_at(0), None);
    }

    #[test]
    fn test_category_and_item() {
        let route = DirectoryRoute::parse("/universities/5/persons/2").unwrap();
        assert_eq!(route.active_tab(), Some(Category::Persons));
        assert_eq!(route.selected_at(0), Some(&id("2")));
        assert_eq!(route.list_href(0), "/universities/5/persons");
        assert_eq!(route.item_href(0, &id("3")), "/universities/5/persons/3");
    }

    #[test]
    fn test_trailing_slashes_are_ignored() {
        assert_eq!(
            DirectoryRoute::parse("/universities/5/study_groups/").unwrap(),
            DirectoryRoute::parse("/universities/5/study_groups").unwrap()
        );
    }

    #[test]
    fn test_nested_levels() {
        let route =
            DirectoryRoute::parse("/universities/1/curriculums/4/study_groups/7/persons/9").unwrap();

        assert_eq!(route.levels.len(), 3);
        assert_eq!(route.category_at(1), Some(Category::StudyGroups));
        assert_eq!(route.selected_at(2), Some(&id("9")));
        assert_eq!(route.list_href(1), "/universities/1/curriculums/4/study_groups");
        assert_eq!(
            route.list_href(2),
            "/universities/1/curriculums/4/study_groups/7/persons"
        );
        assert_eq!(
            route.item_href(1, &id("8")),
            "/universities/1/curriculums/4/study_groups/8"
        );
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        assert_eq!(
            DirectoryRoute::parse("/universities/1/faculties/3"),
            Err(RouteError::UnknownCategory {
                segment: "faculties".into(),
                depth: 0
            })
        );
    }

    #[test]
    fn test_category_that_is_not_a_child_is_an_error() {
        assert_eq!(
            DirectoryRoute::parse("/universities/1/persons/1/curriculums/2"),
            Err(RouteError::UnknownCategory {
                segment: "curriculums".into(),
                depth: 1
            })
        );
    }

    #[test]
    fn test_not_a_directory_path() {
        assert!(matches!(
            DirectoryRoute::parse("/universities"),
            Err(RouteError::NotDirectory(_))
        ));
        assert!(matches!(DirectoryRoute::parse("/"), Err(RouteError::NotDirectory(_))));
        assert_eq!(university_id_of("/universities/3/faculties"), Some(id("3")));
    }

    #[test]
    fn test_segments_are_decoded_and_links_encoded() {
        let route = DirectoryRoute::parse("/universities/n%20s/persons/a%2Fb").unwrap();
        assert_eq!(route.university_id, id("n s"));
        assert_eq!(route.selected_at(0), Some(&id("a/b")));
        assert_eq!(route.item_href(0, &id("a/b")), "/universities/n%20s/persons/a%2Fb");
    }

    #[test]
    fn test_changing_category_changes_active_tab() {
        let mut previous = None;
        for category in Category::ALL {
            let path = format!("/universities/5/{}/1", category.segment());
            let tab = DirectoryRoute::parse(&path).unwrap().active_tab();
            assert_eq!(tab, Some(category));
            assert_ne!(tab, previous);
            previous = tab;
        }
    }

    #[test]
    fn test_round_trip_navigation_matches_fresh_load() {
        let a = "/universities/5/study_groups/1";
        let b = "/universities/5/curriculums/3";
        let fresh = DirectoryRoute::parse(a).unwrap();

        let visited: Vec<DirectoryRoute> = [a, b, a]
            .into_iter()
            .map(|path| DirectoryRoute::parse(path).unwrap())
            .collect();

        assert_ne!(visited[1], fresh);
        assert_eq!(visited[2], fresh);
        assert_eq!(visited[2].active_tab(), Some(Category::StudyGroups));
    }
}
