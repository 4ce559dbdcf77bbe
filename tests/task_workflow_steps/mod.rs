//! Step definitions for the modal task workflow scenarios.

mod then;
pub mod world;
