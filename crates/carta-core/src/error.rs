//! Error types for relationship computation.
//!
//! Structural problems (reserved field names, duplicate keys) are reported
//! at construction time; geometry-derived problems are reported at the
//! point where a division by a perimeter or coastal fraction would occur.

use std::error::Error;
use std::fmt;

/// Which of the three identifier spaces a lookup key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Opaque region id.
    Id,
    /// Display name.
    Name,
    /// Position in canonical order.
    Index,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Name => write!(f, "name"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// Errors arising from region-set construction, identifier lookups, or
/// relationship models.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationError {
    /// Caller-supplied input is structurally invalid: reserved field
    /// name, identical id/name fields, missing property, or a
    /// non-polygonal geometry.
    InvalidInput {
        /// What went wrong.
        reason: String,
    },
    /// A lookup key is not present in the index.
    KeyNotFound {
        /// The identifier space that was searched.
        kind: KeyKind,
        /// The key, rendered as text.
        key: String,
    },
    /// The same id or name appeared twice during index construction.
    DuplicateKey {
        /// The identifier space containing the duplicate.
        kind: KeyKind,
        /// The duplicated key.
        key: String,
    },
    /// A degenerate geometry made a required quantity undefined
    /// (zero perimeter, fully coastal region under coastal correction,
    /// missing centroid, non-finite distance).
    Geometry {
        /// Id of the offending region.
        region: String,
        /// What went wrong.
        reason: String,
    },
}

impl RelationError {
    pub(crate) fn missing(kind: KeyKind, key: impl fmt::Display) -> Self {
        Self::KeyNotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::KeyNotFound { kind, key } => write!(f, "unknown {kind} '{key}'"),
            Self::DuplicateKey { kind, key } => write!(f, "duplicate {kind} '{key}'"),
            Self::Geometry { region, reason } => {
                write!(f, "geometry error in region '{region}': {reason}")
            }
        }
    }
}

impl Error for RelationError {}
