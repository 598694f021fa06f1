//! CampusFlow: task tracking with escalating overdue fees.
//!
//! This crate provides the task lifecycle engine behind CampusFlow: a
//! concurrency-safe task store with atomic identifier allocation, a
//! validated task state machine, and a three-tier progressive overdue-fee
//! calculation driven by an injected clock.
//!
//! # Architecture
//!
//! CampusFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! HTTP routing, wire transport, and durable storage are boundary concerns
//! implemented outside this crate against the [`task::ports`] contracts.

pub mod task;
