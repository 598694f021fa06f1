//! Task lifecycle and overdue-fee management for CampusFlow.
//!
//! This module implements due-dated task tracking behind a storage-agnostic
//! repository port: creating, updating, completing, and deleting tasks,
//! deriving overdue state from an injected clock, computing tiered overdue
//! fees, and aggregating task statistics. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
