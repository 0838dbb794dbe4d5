//! Transition records.

use super::endpoint::Endpoint;
use super::key::TransitionKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A committed `(from, trigger) -> to` entry of a workflow.
///
/// Identity comes from [`key`](Transition::key). Two records with the same
/// current state and trigger are equal even if they lead to different
/// states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transition {
    from: Endpoint,
    trigger: Endpoint,
    to: Endpoint,
}

impl Transition {
    /// Create a transition record.
    pub fn new(from: Endpoint, trigger: Endpoint, to: Endpoint) -> Self {
        Self { from, trigger, to }
    }

    /// The current state.
    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    /// The command or condition that fires the transition.
    pub fn trigger(&self) -> &Endpoint {
        &self.trigger
    }

    /// The next state.
    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    /// The composite identity of this record.
    pub fn key(&self) -> TransitionKey {
        TransitionKey::new(&self.from, &self.trigger)
    }

    /// Swap in a new destination, returning the old one.
    pub(crate) fn redirect(&mut self, to: Endpoint) -> Endpoint {
        std::mem::replace(&mut self.to, to)
    }
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Transition {}

impl Hash for Transition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --[{}]--> {}", self.from, self.trigger, self.to)
    }
}
