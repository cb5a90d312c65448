//! Student record

use std::fmt;

/// A student record.
///
/// The identifier is the registry key and is fixed at construction; all
/// other fields are plain mutable attributes with no validation. The
/// password field is a demo field stored in plaintext, not a security
/// mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    pub name: String,
    /// Primary course name, free text (not a course id)
    pub course: String,
    pub dept: String,
    pub institution: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub degree: String,
    pub year: String,
    pub address: String,
}

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course: impl Into<String>,
        dept: impl Into<String>,
        institution: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        degree: impl Into<String>,
        year: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            dept: dept.into(),
            institution: institution.into(),
            phone: phone.into(),
            email: email.into(),
            password: password.into(),
            degree: degree.into(),
            year: year.into(),
            address: address.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[id={},name={},course={},dept={},inst={},email={},phone={},year={}]",
            self.id,
            self.name,
            self.course,
            self.dept,
            self.institution,
            self.email,
            self.phone,
            self.year
        )
    }
}
