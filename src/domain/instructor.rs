//! Instructor record

use chrono::NaiveDate;
use std::fmt;

/// An instructor record.
///
/// The subject list is exposed as a read-only slice; callers replace it
/// wholesale with [`Instructor::set_subjects`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    id: String,
    pub name: String,
    pub dept: String,
    /// Date of joining
    pub doj: NaiveDate,
    subjects: Vec<String>,
    pub email: String,
    pub phone: String,
    pub experience_years: u32,
}

impl Instructor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        dept: impl Into<String>,
        doj: NaiveDate,
        subjects: Vec<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        experience_years: u32,
    ) -> Self {
        Instructor {
            id: id.into(),
            name: name.into(),
            dept: dept.into(),
            doj,
            subjects,
            email: email.into(),
            phone: phone.into(),
            experience_years,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Replace the whole subject list
    pub fn set_subjects(&mut self, subjects: Vec<String>) {
        self.subjects = subjects;
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instructor[id={},name={},dept={},doj={},subjects=[{}],email={},phone={},exp={}yr]",
            self.id,
            self.name,
            self.dept,
            self.doj.format("%Y-%m-%d"),
            self.subjects.join(", "),
            self.email,
            self.phone,
            self.experience_years
        )
    }
}
