use std::fmt;

/// Machine-readable error codes for scripted consumers of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    SnapshotReadFailed,
    SnapshotParseError,
    ContactNotFound,
    DuplicateContactId,
    DuplicateRelationship,
    SelfRelationship,
    StrengthOutOfRange,
    ExportWriteFailed,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::SnapshotReadFailed => "E1002",
            Self::SnapshotParseError => "E1003",
            Self::ContactNotFound => "E2001",
            Self::DuplicateContactId => "E2002",
            Self::DuplicateRelationship => "E2003",
            Self::SelfRelationship => "E2004",
            Self::StrengthOutOfRange => "E2005",
            Self::ExportWriteFailed => "E5001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::SnapshotReadFailed => "Snapshot file could not be read",
            Self::SnapshotParseError => "Snapshot file is not valid JSON",
            Self::ContactNotFound => "Contact not found",
            Self::DuplicateContactId => "Duplicate contact ID",
            Self::DuplicateRelationship => "Duplicate relationship for contact pair",
            Self::SelfRelationship => "Relationship connects a contact to itself",
            Self::StrengthOutOfRange => "Relationship strength outside [0, 1]",
            Self::ExportWriteFailed => "Graph export write failed",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .warmpath/config.toml and retry."),
            Self::SnapshotReadFailed => {
                Some("Check --data / WARMPATH_DATA_DIR points at the exported snapshot.")
            }
            Self::SnapshotParseError => {
                Some("Re-export contacts.json, relationships.json and interactions.json.")
            }
            Self::ContactNotFound => Some("List contacts with `wp degree` to find valid IDs."),
            Self::DuplicateContactId => Some("Merge or re-key the duplicated contact records."),
            Self::DuplicateRelationship => {
                Some("Keep a single relationship record per pair of contacts.")
            }
            Self::SelfRelationship => Some("Remove relationships whose endpoints are identical."),
            Self::StrengthOutOfRange => Some("Use a tie strength between 0.0 and 1.0."),
            Self::ExportWriteFailed => Some("Check disk space and write permissions."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
