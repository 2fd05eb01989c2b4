//! Composite scoring.
//!
//! - `multiplier`: weighted blend of broker score, structural-holes access,
//!   and influence that ranks contacts by their value as introducers.

pub mod multiplier;
