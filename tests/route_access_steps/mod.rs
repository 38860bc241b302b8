//! Step definitions for login and route access scenarios.

pub mod given;
pub mod then;
pub mod world;
