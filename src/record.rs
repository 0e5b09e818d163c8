use crate::calc::{self, Grade};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const DEFAULT_NAME: &str = "John Doe";
const DEFAULT_ID: &str = "STU001";
const DEFAULT_AGE: i64 = 20;
const DEFAULT_EMAIL: &str = "john@example.com";
const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/150";
const DEFAULT_COURSES: [&str; 3] = ["Angular Basics", "TypeScript", "HTML/CSS"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("course index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Display tag the view maps to a style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTag {
    Enrolled,
    NotEnrolled,
}

impl StatusTag {
    pub fn for_enrolled(enrolled: bool) -> Self {
        if enrolled {
            StatusTag::Enrolled
        } else {
            StatusTag::NotEnrolled
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusTag::Enrolled => "enrolled",
            StatusTag::NotEnrolled => "not-enrolled",
        }
    }
}

/// Form-side edits. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub id: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub pending_course_name: Option<String>,
    pub math_score: Option<f64>,
    pub science_score: Option<f64>,
    pub english_score: Option<f64>,
}

/// State behind the student form.
///
/// `total_score`, `percentage` and `grade` only change in
/// [`StudentRecord::calculate_grades`]; editing a score leaves them stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub id: String,
    pub age: i64,
    pub email: String,
    pub image_url: String,
    enrolled: bool,
    status_tag: StatusTag,
    courses: Vec<String>,
    pub pending_course_name: String,
    pub math_score: f64,
    pub science_score: f64,
    pub english_score: f64,
    total_score: f64,
    percentage: f64,
    grade: Option<Grade>,
}

impl Default for StudentRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            id: DEFAULT_ID.to_string(),
            age: DEFAULT_AGE,
            email: DEFAULT_EMAIL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            enrolled: true,
            status_tag: StatusTag::Enrolled,
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
            pending_course_name: String::new(),
            math_score: 0.0,
            science_score: 0.0,
            english_score: 0.0,
            total_score: 0.0,
            percentage: 0.0,
            grade: None,
        }
    }
}

impl StudentRecord {
    pub fn enrolled(&self) -> bool {
        self.enrolled
    }

    pub fn status_tag(&self) -> StatusTag {
        self.status_tag
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    fn set_enrolled(&mut self, enrolled: bool) {
        self.enrolled = enrolled;
        self.status_tag = StatusTag::for_enrolled(enrolled);
    }

    pub fn enroll(&mut self) {
        self.set_enrolled(true);
        info!(student = %self.name, "{} has been enrolled!", self.name);
    }

    pub fn unenroll(&mut self) {
        self.set_enrolled(false);
        info!(student = %self.name, "{} has been unenrolled!", self.name);
    }

    /// Flips enrollment. Unlike `enroll`/`unenroll` this does not log.
    pub fn toggle_enrollment(&mut self) {
        self.set_enrolled(!self.enrolled);
    }

    /// Commits the staged course name. Returns false (and changes nothing)
    /// when the staged name is blank. The stored name keeps its whitespace.
    pub fn add_course(&mut self) -> bool {
        if self.pending_course_name.trim().is_empty() {
            return false;
        }
        let name = std::mem::take(&mut self.pending_course_name);
        self.courses.push(name);
        true
    }

    pub fn remove_course(&mut self, index: usize) -> Result<String, RecordError> {
        if index >= self.courses.len() {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: self.courses.len(),
            });
        }
        Ok(self.courses.remove(index))
    }

    pub fn calculate_grades(&mut self) {
        let summary =
            calc::summarize_scores(self.math_score, self.science_score, self.english_score);
        self.total_score = summary.total_score;
        self.percentage = summary.percentage;
        self.grade = Some(summary.grade);
    }

    pub fn apply_patch(&mut self, patch: RecordPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.id {
            self.id = v;
        }
        if let Some(v) = patch.age {
            self.age = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.image_url {
            self.image_url = v;
        }
        if let Some(v) = patch.pending_course_name {
            self.pending_course_name = v;
        }
        if let Some(v) = patch.math_score {
            self.math_score = v;
        }
        if let Some(v) = patch.science_score {
            self.science_score = v;
        }
        if let Some(v) = patch.english_score {
            self.english_score = v;
        }
    }
}
