//! Per-contact structural metrics.
//!
//! # Overview
//!
//! Each metric answers a different question about a contact's position:
//!
//! - **Degree** (`degree`): How many people does this contact know directly?
//! - **Broker score** (`broker`): How many of this contact's acquaintances
//!   do not know each other? An ego-network (depth-1) approximation of
//!   betweenness, not a shortest-path computation.
//! - **Constraint** (`constraint`): How redundant are this contact's ties?
//!   Low constraint means access to structural holes.
//! - **Influence** (`influence`): Is this contact connected to other
//!   well-connected contacts? Eigenvector-style power iteration.
//!
//! # Usage
//!
//! All metrics take the contact collection and a [`ContactGraph`] and return
//! records ranked by the metric.
//!
//! ```rust,ignore
//! use warmpath_graph::graph::build_graph_known;
//! use warmpath_graph::metrics::{broker::broker_scores, constraint::structural_holes};
//!
//! let graph = build_graph_known(&snapshot.relationships, &snapshot.contacts);
//! let brokers = broker_scores(&snapshot.contacts, &graph);
//! let holes = structural_holes(&snapshot.contacts, &graph);
//! ```
//!
//! [`ContactGraph`]: crate::graph::ContactGraph

pub mod broker;
pub mod constraint;
pub mod degree;
pub mod influence;
