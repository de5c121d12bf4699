//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL order reads using Diesel ORM
//! - **catalog**: reqwest client for the model catalog service
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod catalog;
pub mod persistence;
