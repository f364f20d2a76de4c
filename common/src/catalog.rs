//! Browsing helpers for the student dashboard.

use std::collections::BTreeMap;

use crate::model::{Category, StudyFile, Subject};

/// Filters selected on the student dashboard. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileQuery {
    pub subject: Option<Subject>,
    pub category: Option<Category>,
    pub unit: Option<i64>,
    pub search: String,
}

impl FileQuery {
    pub fn matches(&self, file: &StudyFile) -> bool {
        if self.subject.is_some_and(|s| s != file.subject) {
            return false;
        }
        if self.category.is_some_and(|c| c != file.category) {
            return false;
        }
        if self.unit.is_some_and(|u| u != file.unit) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || file.name.to_lowercase().contains(&needle)
    }

    /// Matching files in their original order.
    pub fn apply<'a>(&self, files: &'a [StudyFile]) -> Vec<&'a StudyFile> {
        files.iter().filter(|f| self.matches(f)).collect()
    }
}

pub fn count_by_subject(files: &[StudyFile]) -> BTreeMap<Subject, usize> {
    let mut counts = BTreeMap::new();
    for file in files {
        *counts.entry(file.subject).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, name: &str, subject: Subject, category: Category, unit: i64) -> StudyFile {
        StudyFile {
            id: id.to_string(),
            name: name.to_string(),
            subject,
            category,
            unit,
            url: String::new(),
            upload_date: String::new(),
        }
    }

    fn library() -> Vec<StudyFile> {
        vec![
            file("1", "Wave Optics", Subject::Physics, Category::Notes, 1),
            file("2", "Organic PYQs", Subject::Chemistry, Category::SolvedPyqs, 2),
            file("3", "Quantum basics", Subject::Physics, Category::ImportantQuestions, 2),
            file("4", "Optical fibres", Subject::Physics, Category::Notes, 2),
        ]
    }

    fn ids(files: Vec<&StudyFile>) -> Vec<&str> {
        files.into_iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let files = library();
        assert_eq!(ids(FileQuery::default().apply(&files)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filters_combine() {
        let files = library();
        let query = FileQuery {
            subject: Some(Subject::Physics),
            unit: Some(2),
            ..FileQuery::default()
        };
        assert_eq!(ids(query.apply(&files)), ["3", "4"]);

        let query = FileQuery {
            category: Some(Category::Notes),
            ..query
        };
        assert_eq!(ids(query.apply(&files)), ["4"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let files = library();
        let query = FileQuery {
            search: "  OPTIC ".to_string(),
            ..FileQuery::default()
        };
        assert_eq!(ids(query.apply(&files)), ["1", "4"]);
    }

    #[test]
    fn test_counts_by_subject() {
        let counts = count_by_subject(&library());
        assert_eq!(counts.get(&Subject::Physics), Some(&3));
        assert_eq!(counts.get(&Subject::Chemistry), Some(&1));
        assert_eq!(counts.get(&Subject::Beee), None);
    }
}
