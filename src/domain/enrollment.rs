//! Enrollment record

use chrono::NaiveDate;
use std::fmt;

/// Join record linking one student to one course.
///
/// Student and course ids are weak references; neither is required to exist
/// in the registry at any point. The enrollment date is stamped at creation
/// and immutable afterwards; the grade is optional free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    id: String,
    student_id: String,
    course_id: String,
    enrolled_on: NaiveDate,
    grade: Option<String>,
}

impl Enrollment {
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        enrolled_on: NaiveDate,
    ) -> Self {
        Enrollment {
            id: id.into(),
            student_id: student_id.into(),
            course_id: course_id.into(),
            enrolled_on,
            grade: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn enrolled_on(&self) -> NaiveDate {
        self.enrolled_on
    }

    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    pub fn set_grade(&mut self, grade: Option<String>) {
        self.grade = grade;
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment[id={},student={},course={},on={},grade={}]",
            self.id,
            self.student_id,
            self.course_id,
            self.enrolled_on.format("%Y-%m-%d"),
            self.grade.as_deref().unwrap_or("null")
        )
    }
}
