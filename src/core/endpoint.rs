//! Endpoints: the coded tokens a transition connects.
//!
//! An endpoint is either a state or a trigger (a command or condition).
//! Identity is the numeric code alone, so endpoints built independently by
//! catalog accessors compare equal as long as their codes match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The role an endpoint plays inside a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A current or next state.
    State,
    /// A command or condition that triggers a transition.
    Trigger,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Trigger => f.write_str("trigger"),
        }
    }
}

/// A named, integer-coded transition endpoint.
///
/// Equality and hashing use [`code`](Endpoint::code) only. The name is
/// descriptive. Two different logical endpoints that share a code within
/// one role are the same endpoint as far as a
/// [`Workflow`](crate::table::Workflow) is concerned. Keeping codes disjoint
/// is the caller's job. See [`CodePolicy`](crate::builder::CodePolicy) for
/// opt-in detection.
///
/// # Example
///
/// ```rust
/// use flowtable::core::Endpoint;
///
/// let review = Endpoint::new(2, "Expert review");
/// let same_code = Endpoint::new(2, "Renamed review");
///
/// assert_eq!(review, same_code);
/// assert_eq!(review.to_string(), "Expert review (2)");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Endpoint {
    code: u32,
    name: String,
}

impl Endpoint {
    /// Create an endpoint from its code and display name.
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// The caller-assigned identifying code.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
