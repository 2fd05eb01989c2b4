//! One analysis run's input: contacts, relationships and interactions.
//!
//! # Files
//!
//! A snapshot directory holds three JSON arrays:
//!
//! ```text
//! <data>/contacts.json       [{ "id", "name", "company", "category", "tier" }]
//! <data>/relationships.json  [{ "a", "b", "kind", "strength", "note" }]
//! <data>/interactions.json   [{ "contact_id", "kind", "date" }]
//! ```
//!
//! A missing file is an empty collection. This is the ingestion boundary:
//! [`Snapshot::validate`] enforces the data-model invariants here so the
//! analytics engine never has to. Dangling references (a relationship or
//! interaction naming an unknown contact) are tolerated and only logged,
//! since the source exports may lag contact imports.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ErrorCode;
use crate::model::{Contact, ContactId, Interaction, Relationship};

pub const CONTACTS_FILE: &str = "contacts.json";
pub const RELATIONSHIPS_FILE: &str = "relationships.json";
pub const INTERACTIONS_FILE: &str = "interactions.json";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A record that violates a data-model invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("contact id {id} appears more than once")]
    DuplicateContact { id: ContactId },

    #[error("more than one relationship between {a} and {b}")]
    DuplicateRelationship { a: ContactId, b: ContactId },

    #[error("relationship connects {id} to itself")]
    SelfRelationship { id: ContactId },

    #[error("relationship {a}-{b} has strength {strength}, expected a value in [0, 1]")]
    StrengthOutOfRange {
        a: ContactId,
        b: ContactId,
        strength: f64,
    },
}

impl ValidationError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateContact { .. } => ErrorCode::DuplicateContactId,
            Self::DuplicateRelationship { .. } => ErrorCode::DuplicateRelationship,
            Self::SelfRelationship { .. } => ErrorCode::SelfRelationship,
            Self::StrengthOutOfRange { .. } => ErrorCode::StrengthOutOfRange,
        }
    }
}

/// Errors from reading a snapshot directory.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),
}

impl SnapshotError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::SnapshotReadFailed,
            Self::Parse { .. } => ErrorCode::SnapshotParseError,
            Self::Invalid(inner) => inner.code(),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Immutable input collections for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(
        contacts: Vec<Contact>,
        relationships: Vec<Relationship>,
        interactions: Vec<Interaction>,
    ) -> Self {
        Self {
            contacts,
            relationships,
            interactions,
        }
    }

    /// Load and validate the snapshot stored in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when a file cannot be read or parsed, or when
    /// the records break a data-model invariant.
    #[instrument]
    pub fn load(dir: &Path) -> Result<Self, SnapshotError> {
        let snapshot = Self {
            contacts: read_collection(&dir.join(CONTACTS_FILE))?,
            relationships: read_collection(&dir.join(RELATIONSHIPS_FILE))?,
            interactions: read_collection(&dir.join(INTERACTIONS_FILE))?,
        };

        snapshot.validate()?;
        snapshot.log_dangling_references();

        debug!(
            contacts = snapshot.contacts.len(),
            relationships = snapshot.relationships.len(),
            interactions = snapshot.interactions.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Check the data-model invariants.
    ///
    /// Reports the first violation found, scanning contacts before
    /// relationships in collection order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen_ids = HashSet::with_capacity(self.contacts.len());
        for contact in &self.contacts {
            if !seen_ids.insert(&contact.id) {
                return Err(ValidationError::DuplicateContact {
                    id: contact.id.clone(),
                });
            }
        }

        let mut seen_pairs = HashSet::with_capacity(self.relationships.len());
        for rel in &self.relationships {
            if rel.a == rel.b {
                return Err(ValidationError::SelfRelationship { id: rel.a.clone() });
            }
            if !rel.strength.is_finite() || !(0.0..=1.0).contains(&rel.strength) {
                return Err(ValidationError::StrengthOutOfRange {
                    a: rel.a.clone(),
                    b: rel.b.clone(),
                    strength: rel.strength,
                });
            }
            if !seen_pairs.insert(rel.pair_key()) {
                return Err(ValidationError::DuplicateRelationship {
                    a: rel.a.clone(),
                    b: rel.b.clone(),
                });
            }
        }

        Ok(())
    }

    /// Look up a contact by ID.
    #[must_use]
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id.as_str() == id)
    }

    fn log_dangling_references(&self) {
        let known: HashSet<&str> = self.contacts.iter().map(|c| c.id.as_str()).collect();

        let dangling_rels = self
            .relationships
            .iter()
            .filter(|r| !known.contains(r.a.as_str()) || !known.contains(r.b.as_str()))
            .count();
        if dangling_rels > 0 {
            warn!(
                count = dangling_rels,
                "relationships reference unknown contacts and will be skipped"
            );
        }

        let dangling_interactions = self
            .interactions
            .iter()
            .filter(|i| !known.contains(i.contact_id.as_str()))
            .count();
        if dangling_interactions > 0 {
            warn!(
                count = dangling_interactions,
                "interactions reference unknown contacts and will be ignored"
            );
        }
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SnapshotError> {
    if !path.exists() {
        debug!(path = %path.display(), "snapshot file missing, using empty collection");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
