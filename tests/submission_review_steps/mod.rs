//! Step definitions for submission review scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
