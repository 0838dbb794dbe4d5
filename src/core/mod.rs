//! Core transition table types.
//!
//! This module contains the value types every workflow is made of:
//! - Endpoints, the coded states and triggers
//! - Transition keys, the composite `(from, trigger)` identity
//! - Transition records, keyed entries pointing at a next state
//!
//! All types here are plain immutable values with identity defined by code.

mod endpoint;
mod key;
mod transition;

pub use endpoint::{Endpoint, Role};
pub use key::TransitionKey;
pub use transition::Transition;
