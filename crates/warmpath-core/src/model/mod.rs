//! Typed records consumed by the analytics engine.
//!
//! Records are created by an external import or entry process and are
//! treated as immutable for the duration of an analysis run.

pub mod contact;
pub mod interaction;
pub mod relationship;

pub use contact::{Contact, ContactId};
pub use interaction::Interaction;
pub use relationship::Relationship;
