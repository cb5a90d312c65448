//! Startup registry construction

use crate::domain::{Course, Instructor, Registry, Student};
use crate::error::Result;
use crate::infrastructure::SeedData;
use chrono::NaiveDate;
use std::path::Path;

/// Build the registry the process starts with: from a seed file when one is
/// given, otherwise the built-in demo records.
pub fn build_registry(seed_file: Option<&Path>) -> Result<Registry> {
    match seed_file {
        Some(path) => Ok(SeedData::load_from_path(path)?.into_registry()),
        None => Ok(demo_registry()),
    }
}

/// The built-in demo data: one instructor with two courses (one assigned)
/// and one student enrolled in the first course.
pub fn demo_registry() -> Registry {
    let mut registry = Registry::new();

    registry.add_instructor(Instructor::new(
        "I100",
        "Asha Sharma",
        "Computer Science",
        NaiveDate::from_ymd_opt(2020, 7, 1).expect("valid date"),
        vec!["Data Structures".to_string(), "Algorithms".to_string()],
        "asha@example.com",
        "+91-9876543210",
        6,
    ));

    registry.add_course(Course::new(
        "C101",
        "Introduction to Java",
        "Basics of Java programming",
    ));
    registry.add_course(Course::new("C102", "Web Development", "HTML, CSS, JS basics"));
    registry.assign_instructor_to_course("I100", "C101");

    registry.add_student(Student::new(
        "S500",
        "Rohit Kumar",
        "B.Tech",
        "CSE",
        "SRM Ramapuram",
        "+91-9123456789",
        "rohit@example.com",
        "secret123",
        "B.Tech",
        "2nd",
        "Chennai",
    ));
    let _ = registry.enroll_student("S500", "C101");

    registry
}
