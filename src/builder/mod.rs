//! Builder API for wiring workflows.
//!
//! This module provides the fluent builder that turns catalog selectors into
//! a transition table, plus the `catalog!` macro for declaring the catalogs
//! themselves with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod transition;
pub mod workflow;

pub use error::ConfigurationError;
pub use transition::TransitionDraft;
pub use workflow::{CodePolicy, WorkflowBuilder};
