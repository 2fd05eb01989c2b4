use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contact::ContactId;

/// A dated touchpoint with a single contact.
///
/// Interactions never add graph topology; they only feed the observed
/// contact frequency used by tie-strength classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub contact_id: ContactId,
    /// e.g. `email_sent`, `meeting`, `call`.
    #[serde(default)]
    pub kind: String,
    pub date: NaiveDate,
}

impl Interaction {
    #[must_use]
    pub fn new(contact_id: impl Into<ContactId>, kind: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            contact_id: contact_id.into(),
            kind: kind.into(),
            date,
        }
    }
}
