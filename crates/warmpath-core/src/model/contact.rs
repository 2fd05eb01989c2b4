use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

/// Stable identifier of a contact.
///
/// Relationships and interactions refer to contacts by this value. The
/// importer decides the format; the engine only compares IDs for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ContactId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A person or organization in the relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub company: String,
    /// Free-form segment label, e.g. "VC Partner" or "Family Office CIO".
    #[serde(default)]
    pub category: String,
    /// Priority ordinal; lower is more important.
    #[serde(default)]
    pub tier: u32,
}

impl Contact {
    #[must_use]
    pub fn new(
        id: impl Into<ContactId>,
        name: impl Into<String>,
        company: impl Into<String>,
        category: impl Into<String>,
        tier: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            category: category.into(),
            tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_serializes_as_plain_string() {
        let id = ContactId::from("c-17");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"c-17\"");

        let back: ContactId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn contact_optional_fields_default() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":"1","name":"Ada"}"#).expect("deserialize");
        assert_eq!(contact.company, "");
        assert_eq!(contact.category, "");
        assert_eq!(contact.tier, 0);
    }

    #[test]
    fn contact_id_borrows_as_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(ContactId::from("x"));
        assert!(set.contains("x"));
    }
}
