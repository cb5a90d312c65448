//! Infrastructure layer - External I/O

pub mod seed_file;

pub use seed_file::SeedData;
