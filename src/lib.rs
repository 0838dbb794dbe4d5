//! Flowtable: a minimal, embeddable state transition table
//!
//! Given a current state and a trigger, a workflow deterministically yields
//! the next state, or `None` when no such transition exists. Callers bring
//! their own state and trigger catalogs and wire transitions with a fluent
//! builder instead of hand-written `match` ladders.
//!
//! # Core Concepts
//!
//! - **Endpoint**: A named, integer-coded state or trigger, compared by code
//! - **Catalog**: A `Default` type whose accessors yield endpoints
//! - **Builder**: Fluent `from / when / go_to` wiring with last-write-wins overwrites
//! - **Workflow**: The frozen table, queried by selector or by raw code
//!
//! # Example
//!
//! ```rust
//! use flowtable::builder::{ConfigurationError, WorkflowBuilder};
//! use flowtable::catalog;
//!
//! catalog! {
//!     pub struct ReviewStates {
//!         form_submission = 1 => "Initial submission",
//!         expert_review = 2 => "Expert review submission",
//!         supervisor_review = 3 => "Supervisor review submission",
//!     }
//! }
//!
//! catalog! {
//!     pub struct ReviewCommands {
//!         approve = 1 => "Approve",
//!         return_back = 3 => "Return",
//!     }
//! }
//!
//! # fn main() -> Result<(), ConfigurationError> {
//! let workflow = WorkflowBuilder::<ReviewStates, ReviewCommands>::new()
//!     .add(|t| {
//!         t.from(ReviewStates::form_submission)
//!             .when(ReviewCommands::approve)
//!             .go_to(ReviewStates::expert_review)
//!     })?
//!     .add(|t| {
//!         t.from(ReviewStates::expert_review)
//!             .when(ReviewCommands::approve)
//!             .go_to(ReviewStates::supervisor_review)
//!     })?
//!     .add(|t| {
//!         t.from(ReviewStates::expert_review)
//!             .when(ReviewCommands::return_back)
//!             .go_to(ReviewStates::form_submission)
//!     })?
//!     .build();
//!
//! let next = workflow.next_state(ReviewStates::expert_review, ReviewCommands::approve);
//! assert_eq!(next.map(|s| s.code()), Some(3));
//! assert_eq!(workflow.available_triggers_from(ReviewStates::expert_review).len(), 2);
//!
//! let by_code = workflow.next_state_by_code(1, 1);
//! assert_eq!(by_code.map(|s| s.name()), Some("Expert review submission"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{CodePolicy, ConfigurationError, TransitionDraft, WorkflowBuilder};
pub use crate::core::{Endpoint, Role, Transition, TransitionKey};
pub use crate::table::Workflow;
