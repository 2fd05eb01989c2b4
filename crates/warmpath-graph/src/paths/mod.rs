//! Breadth-first path queries over the contact graph.
//!
//! # Overview
//!
//! - **Reach** (`reach`): everyone within N hops of a contact.
//! - **Warm intros** (`warm_intro`): chains of people who can pass an
//!   introduction along to a target, shortest and strongest first.
//! - **Mutual connections** (`mutual`): shared direct neighbors of two
//!   contacts.
//!
//! All three walk neighbor lists in insertion order, so results are
//! deterministic for a given snapshot.

pub mod mutual;
pub mod reach;
pub mod warm_intro;
