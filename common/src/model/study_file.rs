//! Study file records and the fixed subject/category vocabularies.
//!
//! Subjects and categories serialise by their display label so that the
//! persisted blobs read the same as what the dashboards show.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::sanitize::sanitize;

use super::display_timestamp;

/// Unit numbers offered by the uploader form. Records are not checked
/// against this list.
pub const UNITS: [i64; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    #[serde(rename = "BCME")]
    Bcme,
    Mechanics,
    #[serde(rename = "BEEE")]
    Beee,
    #[serde(rename = "M-I")]
    MathsOne,
    #[serde(rename = "M-II")]
    MathsTwo,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Bcme,
        Subject::Mechanics,
        Subject::Beee,
        Subject::MathsOne,
        Subject::MathsTwo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Bcme => "BCME",
            Subject::Mechanics => "Mechanics",
            Subject::Beee => "BEEE",
            Subject::MathsOne => "M-I",
            Subject::MathsTwo => "M-II",
        }
    }

    pub fn from_label(label: &str) -> Option<Subject> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Solved PYQs")]
    SolvedPyqs,
    Notes,
    #[serde(rename = "Important Questions")]
    ImportantQuestions,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SolvedPyqs,
        Category::Notes,
        Category::ImportantQuestions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::SolvedPyqs => "Solved PYQs",
            Category::Notes => "Notes",
            Category::ImportantQuestions => "Important Questions",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Metadata for one uploaded study file.
///
/// Records are created once and removed by `id`; they are never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyFile {
    pub id: String,
    pub name: String,
    pub subject: Subject,
    pub category: Category,
    pub unit: i64,
    pub url: String,
    pub upload_date: String,
}

/// In-progress values of the uploader's "add file" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDraft {
    pub name: String,
    pub subject: Subject,
    pub category: Category,
    pub unit: i64,
    pub url: String,
}

impl Default for FileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            subject: Subject::Physics,
            category: Category::Notes,
            unit: UNITS[0],
            url: String::new(),
        }
    }
}

impl FileDraft {
    /// Turns the draft into a new record with a fresh id and the current
    /// display timestamp.
    ///
    /// The name is trimmed and sanitized, the url trimmed. Both must be
    /// non-empty afterwards.
    pub fn build(&self) -> Result<StudyFile> {
        let name = sanitize(self.name.trim());
        if name.is_empty() {
            return Err(Error::invalid_draft("a file name is required"));
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::invalid_draft("a link to the file is required"));
        }

        Ok(StudyFile {
            id: Uuid::new_v4().to_string(),
            name,
            subject: self.subject,
            category: self.category,
            unit: self.unit,
            url: url.to_string(),
            upload_date: display_timestamp(),
        })
    }
}
