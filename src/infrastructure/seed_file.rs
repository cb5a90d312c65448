//! TOML seed-file loading
//!
//! The `--seed` flag points at a TOML file describing the records the
//! registry starts with. The file is read once at startup; registry state is
//! never written back.

use crate::domain::{Course, Instructor, Registry, Student};
use crate::error::{CampusError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub instructors: Vec<InstructorSeed>,
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
    #[serde(default)]
    pub students: Vec<StudentSeed>,
    #[serde(default)]
    pub assignments: Vec<AssignmentSeed>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentSeed>,
}

#[derive(Debug, Deserialize)]
pub struct InstructorSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dept: String,
    pub doj: NaiveDate,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub experience_years: u32,
}

#[derive(Debug, Deserialize)]
pub struct CourseSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct StudentSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentSeed {
    pub instructor_id: String,
    pub course_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EnrollmentSeed {
    pub student_id: String,
    pub course_id: String,
}

impl SeedData {
    /// Load seed data from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CampusError::Seed(format!("Seed file not found: {}", path.display()))
            } else {
                CampusError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Build a registry from the seed records.
    ///
    /// Assignments and enrollments go through the normal registry
    /// operations, so entries referencing unknown ids are skipped the same
    /// way a live `assign`/`enroll` would fail.
    pub fn into_registry(self) -> Registry {
        let mut registry = Registry::new();

        for seed in self.instructors {
            registry.add_instructor(Instructor::new(
                seed.id,
                seed.name,
                seed.dept,
                seed.doj,
                seed.subjects,
                seed.email,
                seed.phone,
                seed.experience_years,
            ));
        }
        for seed in self.courses {
            registry.add_course(Course::new(seed.id, seed.name, seed.description));
        }
        for seed in self.students {
            registry.add_student(Student::new(
                seed.id,
                seed.name,
                seed.course,
                seed.dept,
                seed.institution,
                seed.phone,
                seed.email,
                seed.password,
                seed.degree,
                seed.year,
                seed.address,
            ));
        }
        for seed in self.assignments {
            registry.assign_instructor_to_course(&seed.instructor_id, &seed.course_id);
        }
        for seed in self.enrollments {
            let _ = registry.enroll_student(&seed.student_id, &seed.course_id);
        }

        registry
    }
}
