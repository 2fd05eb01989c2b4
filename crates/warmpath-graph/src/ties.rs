//! Tie-strength classification.
//!
//! # Overview
//!
//! A tie's strength blends what the relationship record declares with how
//! often the two endpoints show up in the interaction log:
//!
//! ```text
//! frequency    = min((interactions(a) + interactions(b)) / 10, 1)
//! tie_strength = (declared_strength + frequency) / 2
//! ```
//!
//! Strong ties carry trust and are the best warm-intro routes. Weak ties
//! reach into other circles and bring new information.
//!
//! [`contact_ties`] is the per-contact view: every relationship touching one
//! contact, bucketed by declared strength alone.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::{Contact, ContactId, Interaction, Relationship};

use crate::graph::index_contacts;

/// Interaction count at which the frequency component saturates.
const FREQUENCY_SATURATION: f64 = 10.0;

const STRONG_TIE: f64 = 0.7;
const MEDIUM_TIE: f64 = 0.4;

// ---------------------------------------------------------------------------
// TieClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TieClass {
    Strong,
    Medium,
    Weak,
}

impl TieClass {
    /// Class of a blended tie strength: `> 0.7` strong, `> 0.4` medium.
    #[must_use]
    pub fn from_tie_strength(value: f64) -> Self {
        if value > STRONG_TIE {
            Self::Strong
        } else if value > MEDIUM_TIE {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    /// Class of a declared strength: `≥ 0.7` strong, `≥ 0.4` medium.
    #[must_use]
    pub fn from_declared(strength: f64) -> Self {
        if strength >= STRONG_TIE {
            Self::Strong
        } else if strength >= MEDIUM_TIE {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Medium => "Medium",
            Self::Weak => "Weak",
        }
    }

    #[must_use]
    pub const fn strategic_value(self) -> &'static str {
        match self {
            Self::Strong => "Trusted relationship, good for warm intros",
            Self::Medium => "Developing relationship",
            Self::Weak => "Access to new networks, novel information",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-relationship classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieRecord {
    pub contact_1: ContactId,
    pub contact_2: ContactId,
    pub name_1: String,
    pub name_2: String,
    pub strength: f64,
    pub frequency_score: f64,
    pub tie_strength: f64,
    pub class: TieClass,
    pub strategic_value: &'static str,
}

/// `min(count / 10, 1)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn frequency_score(interaction_count: usize) -> f64 {
    (interaction_count as f64 / FREQUENCY_SATURATION).min(1.0)
}

/// Classify every relationship whose endpoints are both known contacts,
/// ranked by blended tie strength (descending).
#[must_use]
#[instrument(skip_all, fields(relationships = relationships.len(), interactions = interactions.len()))]
pub fn tie_strengths(
    relationships: &[Relationship],
    interactions: &[Interaction],
    contacts: &[Contact],
) -> Vec<TieRecord> {
    let index = index_contacts(contacts);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for interaction in interactions {
        *counts.entry(interaction.contact_id.as_str()).or_default() += 1;
    }
    let count_of = |id: &ContactId| counts.get(id.as_str()).copied().unwrap_or(0);

    let mut records: Vec<TieRecord> = relationships
        .iter()
        .filter_map(|rel| {
            let first = index.get(rel.a.as_str())?;
            let second = index.get(rel.b.as_str())?;

            let frequency = frequency_score(count_of(&rel.a) + count_of(&rel.b));
            let tie_strength = (rel.strength + frequency) / 2.0;
            let class = TieClass::from_tie_strength(tie_strength);

            Some(TieRecord {
                contact_1: rel.a.clone(),
                contact_2: rel.b.clone(),
                name_1: first.name.clone(),
                name_2: second.name.clone(),
                strength: rel.strength,
                frequency_score: frequency,
                tie_strength,
                class,
                strategic_value: class.strategic_value(),
            })
        })
        .collect();

    records.sort_by(|a, b| b.tie_strength.total_cmp(&a.tie_strength));

    debug!(classified = records.len(), "tie strengths computed");
    records
}

// ---------------------------------------------------------------------------
// Per-contact summary
// ---------------------------------------------------------------------------

/// One relationship seen from a given contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactTie {
    pub contact: Contact,
    pub relationship_kind: String,
    pub strength: f64,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactTies {
    pub strong: Vec<ContactTie>,
    pub medium: Vec<ContactTie>,
    pub weak: Vec<ContactTie>,
}

impl ContactTies {
    #[must_use]
    pub fn total(&self) -> usize {
        self.strong.len() + self.medium.len() + self.weak.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Relationships of `contact_id`, resolved to the other contact and grouped
/// by declared strength. Relationships to unknown contacts are skipped.
#[must_use]
#[instrument(skip(relationships, contacts))]
pub fn contact_ties(
    contact_id: &str,
    relationships: &[Relationship],
    contacts: &[Contact],
) -> ContactTies {
    let index = index_contacts(contacts);
    let mut ties = ContactTies::default();

    for rel in relationships {
        let Some(other) = rel.other(contact_id) else {
            continue;
        };
        let Some(contact) = index.get(other.as_str()) else {
            continue;
        };

        let tie = ContactTie {
            contact: (*contact).clone(),
            relationship_kind: rel.kind.clone(),
            strength: rel.strength,
            note: rel.note.clone(),
        };

        match TieClass::from_declared(rel.strength) {
            TieClass::Strong => ties.strong.push(tie),
            TieClass::Medium => ties.medium.push(tie),
            TieClass::Weak => ties.weak.push(tie),
        }
    }

    ties
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn people(ids: &[&str]) -> Vec<Contact> {
        ids.iter()
            .map(|id| Contact::new(*id, id.to_uppercase(), "", "", 1))
            .collect()
    }

    fn touches(id: &str, n: usize) -> Vec<Interaction> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
        (0..n).map(|_| Interaction::new(id, "email", date)).collect()
    }

    #[test]
    fn frequency_saturates_at_ten() {
        assert!((frequency_score(0)).abs() < f64::EPSILON);
        assert!((frequency_score(4) - 0.4).abs() < 1e-12);
        assert!((frequency_score(25) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blends_declared_strength_with_interactions() {
        let contacts = people(&["a", "b", "c"]);
        let rels = vec![Relationship::new("a", "b", 0.8), Relationship::new("b", "c", 0.2)];
        let mut log = touches("a", 6);
        log.extend(touches("b", 4));

        let records = tie_strengths(&rels, &log, &contacts);

        // a-b: (0.8 + 1.0) / 2 = 0.9; b-c: (0.2 + 0.4) / 2 = 0.3
        assert_eq!(records[0].contact_1.as_str(), "a");
        assert!((records[0].tie_strength - 0.9).abs() < 1e-12);
        assert_eq!(records[0].class, TieClass::Strong);
        assert_eq!(records[0].name_2, "B");
        assert!((records[1].tie_strength - 0.3).abs() < 1e-12);
        assert_eq!(records[1].class, TieClass::Weak);
    }

    #[test]
    fn class_boundaries() {
        assert_eq!(TieClass::from_tie_strength(0.7), TieClass::Medium);
        assert_eq!(TieClass::from_tie_strength(0.71), TieClass::Strong);
        assert_eq!(TieClass::from_tie_strength(0.4), TieClass::Weak);
        assert_eq!(TieClass::from_declared(0.7), TieClass::Strong);
        assert_eq!(TieClass::from_declared(0.4), TieClass::Medium);
        assert_eq!(TieClass::from_declared(0.39), TieClass::Weak);
    }

    #[test]
    fn unknown_endpoints_are_skipped() {
        let contacts = people(&["a"]);
        let rels = vec![Relationship::new("a", "ghost", 0.9)];
        assert!(tie_strengths(&rels, &[], &contacts).is_empty());
    }

    #[test]
    fn contact_ties_groups_by_declared_strength() {
        let contacts = people(&["me", "x", "y", "z"]);
        let rels = vec![
            Relationship::new("me", "x", 0.9),
            Relationship::new("y", "me", 0.5),
            Relationship::new("me", "z", 0.1),
            Relationship::new("me", "ghost", 0.9),
            Relationship::new("x", "y", 0.9),
        ];
        let ties = contact_ties("me", &rels, &contacts);

        assert_eq!(ties.total(), 3);
        assert_eq!(ties.strong[0].contact.id.as_str(), "x");
        assert_eq!(ties.medium[0].contact.id.as_str(), "y");
        assert_eq!(ties.weak[0].contact.id.as_str(), "z");
        assert_eq!(ties.strong[0].relationship_kind, "knows");
    }
}
