//! Step definitions and world state for overdue-fee behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
