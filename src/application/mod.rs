//! Application layer - Use cases and orchestration

pub mod bootstrap;

pub use bootstrap::{build_registry, demo_registry};
