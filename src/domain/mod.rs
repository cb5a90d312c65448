//! Domain layer - Entity records and the registry

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod registry;
pub mod student;

pub use course::Course;
pub use enrollment::Enrollment;
pub use instructor::Instructor;
pub use registry::Registry;
pub use student::Student;
