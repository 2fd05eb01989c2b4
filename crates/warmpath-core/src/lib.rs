#![forbid(unsafe_code)]
//! warmpath-core library.
//!
//! Typed records for the relationship graph (contacts, relationships,
//! interactions), the snapshot loader that reads them at the ingestion
//! boundary, and layered configuration.
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for file I/O, typed `thiserror` enums for
//!   data validation. Every typed error maps to an [`error::ErrorCode`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod model;
pub mod snapshot;

pub use model::{Contact, ContactId, Interaction, Relationship};
pub use snapshot::Snapshot;
