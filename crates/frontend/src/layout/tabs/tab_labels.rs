//! Tab labels - единственный источник правды для заголовков вкладок категорий.

use contracts::shared::Category;

pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::Subdivisions => "subdivisions",
        Category::StudyGroups => "study groups",
        Category::Curriculums => "curriculums",
        Category::Persons => "persons",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique_and_non_empty() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| category_label(*c)).collect();
        assert!(labels.iter().all(|l| !l.is_empty()));
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
        assert_eq!(category_label(Category::StudyGroups), "study groups");
    }
}
