//! Configuration errors for workflow builders.

use crate::core::Role;
use thiserror::Error;

/// Errors raised while wiring a workflow.
///
/// These all mean the table was declared incorrectly. They abort the `add`
/// call that caused them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("'If' statement is not defined. Call .when(trigger) in the transition")]
    MissingTrigger,

    #[error("'From' statement is not defined. Call .from(state) in the transition")]
    MissingFrom,

    #[error("'GoTo' statement is not defined. Call .go_to(state) in the transition")]
    MissingGoTo,

    #[error("Conflicting {role} code {code}: already declared as '{existing}', got '{incoming}'")]
    ConflictingCode {
        role: Role,
        code: u32,
        existing: String,
        incoming: String,
    },
}
