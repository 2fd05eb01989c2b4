use serde::{Deserialize, Serialize};

use super::contact::ContactId;

/// An undirected, weighted tie between two contacts.
///
/// `a` and `b` are interchangeable: the graph treats the record as
/// traversable from either endpoint with the same strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub a: ContactId,
    pub b: ContactId,
    /// Free-form label such as `knows`, `worked_with` or `introduced_by`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Declared tie intensity in `[0, 1]`.
    #[serde(default = "default_strength")]
    pub strength: f64,
    #[serde(default)]
    pub note: String,
}

impl Relationship {
    #[must_use]
    pub fn new(a: impl Into<ContactId>, b: impl Into<ContactId>, strength: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            kind: default_kind(),
            strength,
            note: String::new(),
        }
    }

    /// Return the endpoint opposite `id`, or `None` when `id` is not an endpoint.
    #[must_use]
    pub fn other(&self, id: &str) -> Option<&ContactId> {
        if self.a.as_str() == id {
            Some(&self.b)
        } else if self.b.as_str() == id {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Canonical unordered key for duplicate detection.
    #[must_use]
    pub fn pair_key(&self) -> (&ContactId, &ContactId) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

fn default_kind() -> String {
    "knows".to_string()
}

const fn default_strength() -> f64 {
    0.5
}
