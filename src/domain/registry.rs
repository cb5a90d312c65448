//! In-memory registry holding the four entity collections

use crate::domain::{Course, Enrollment, Instructor, Student};
use chrono::Local;
use std::collections::HashMap;
use uuid::Uuid;

/// The in-memory record registry.
///
/// Four independent keyed collections, one per entity type. Cross-entity
/// references (course to instructor, enrollment to student/course) are plain
/// identifiers with no referential-integrity enforcement: removing an entity
/// never cascades, and references are allowed to dangle. Failures are
/// signaled by `false`/`None`, never by an error type.
///
/// Iteration order of the `list` accessors is unspecified.
#[derive(Debug, Default)]
pub struct Registry {
    students: HashMap<String, Student>,
    instructors: HashMap<String, Instructor>,
    courses: HashMap<String, Course>,
    enrollments: HashMap<String, Enrollment>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    // Student operations

    /// Insert or replace the student at its id (last write wins, silent)
    pub fn add_student(&mut self, student: Student) {
        self.students.insert(student.id().to_string(), student);
    }

    pub fn get_student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn remove_student(&mut self, id: &str) -> Option<Student> {
        self.students.remove(id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    // Instructor operations

    pub fn add_instructor(&mut self, instructor: Instructor) {
        self.instructors
            .insert(instructor.id().to_string(), instructor);
    }

    pub fn get_instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    pub fn remove_instructor(&mut self, id: &str) -> Option<Instructor> {
        self.instructors.remove(id)
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    // Course operations

    pub fn add_course(&mut self, course: Course) {
        self.courses.insert(course.id().to_string(), course);
    }

    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn remove_course(&mut self, id: &str) -> Option<Course> {
        self.courses.remove(id)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    // Relationship operations

    /// Point a course at an instructor.
    ///
    /// Succeeds only if both ids currently exist; otherwise returns false
    /// with no mutation. An instructor may be assigned to any number of
    /// courses.
    pub fn assign_instructor_to_course(&mut self, instructor_id: &str, course_id: &str) -> bool {
        if !self.instructors.contains_key(instructor_id) {
            return false;
        }
        let Some(course) = self.courses.get_mut(course_id) else {
            return false;
        };
        course.instructor_id = Some(instructor_id.to_string());
        true
    }

    /// Enroll a student into a course.
    ///
    /// Both ids must exist; on success a new enrollment with a generated id
    /// and today's date is stored and a copy returned. There is no
    /// duplicate check, so repeated calls create distinct enrollments.
    pub fn enroll_student(&mut self, student_id: &str, course_id: &str) -> Option<Enrollment> {
        if !self.students.contains_key(student_id) || !self.courses.contains_key(course_id) {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let enrollment =
            Enrollment::new(id.clone(), student_id, course_id, Local::now().date_naive());
        self.enrollments.insert(id, enrollment.clone());
        Some(enrollment)
    }

    /// Remove an enrollment, returning whether one was removed
    pub fn unenroll(&mut self, enrollment_id: &str) -> bool {
        self.enrollments.remove(enrollment_id).is_some()
    }

    pub fn enrollments(&self) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.values()
    }

    /// All courses currently assigned to the given instructor (exact match)
    pub fn courses_by_instructor(&self, instructor_id: &str) -> Vec<&Course> {
        self.courses
            .values()
            .filter(|c| c.instructor_id.as_deref() == Some(instructor_id))
            .collect()
    }

    /// All enrollments referencing the given student
    pub fn enrollments_for_student(&self, student_id: &str) -> Vec<&Enrollment> {
        self.enrollments
            .values()
            .filter(|e| e.student_id() == student_id)
            .collect()
    }
}
