//! Data model for the enrollment registry.
//!
//! This crate defines the passive record entity and the closed categorical
//! sets it references. It carries no numbering or persistence logic; the
//! engine crates operate on these types.

pub mod categories;
pub mod student;

pub use categories::{ClassName, Dormitory, Program};
pub use student::{Enrollment, Residency, StudentRecord};
