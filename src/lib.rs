//! campus - In-memory student-records manager
//!
//! A command-line demo that tracks students, instructors, courses and
//! enrollments in an in-memory registry, with an interactive shell for
//! listing records, enrolling students and assigning instructors.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CampusError;
