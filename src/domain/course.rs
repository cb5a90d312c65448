//! Course record

use std::fmt;

/// A course record.
///
/// `instructor_id` is a weak reference by identifier: it is never validated
/// against the instructor collection and may dangle if the instructor is
/// removed after assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    pub name: String,
    pub description: String,
    pub instructor_id: Option<String>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Course {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            instructor_id: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course[id={},name={},instructor={}]",
            self.id,
            self.name,
            self.instructor_id.as_deref().unwrap_or("null")
        )
    }
}
