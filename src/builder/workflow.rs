//! Builder for assembling workflows.

use crate::builder::error::ConfigurationError;
use crate::builder::transition::TransitionDraft;
use crate::core::{Endpoint, Role, Transition, TransitionKey};
use crate::table::Workflow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::marker::PhantomData;

/// What to do when one code shows up under two different names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodePolicy {
    /// Treat both as the same endpoint and log a warning
    #[default]
    Alias,

    /// Fail the `add` call with [`ConfigurationError::ConflictingCode`]
    Reject,
}

/// Builder for constructing workflows with a fluent API.
///
/// Re-declaring a `(from, trigger)` pair replaces its destination. The
/// record keeps its original position.
///
/// # Example
///
/// ```
/// use flowtable::builder::{ConfigurationError, WorkflowBuilder};
/// use flowtable::catalog;
///
/// catalog! {
///     struct States {
///         open = 1 => "Open",
///         closed = 2 => "Closed",
///     }
/// }
///
/// catalog! {
///     struct Commands {
///         close = 1 => "Close",
///     }
/// }
///
/// # fn main() -> Result<(), ConfigurationError> {
/// let workflow = WorkflowBuilder::<States, Commands>::new()
///     .add(|t| t.from(States::open).when(Commands::close).go_to(States::closed))?
///     .build();
///
/// assert_eq!(
///     workflow.next_state(States::open, Commands::close),
///     Some(&States.closed())
/// );
/// # Ok(())
/// # }
/// ```
pub struct WorkflowBuilder<S, C> {
    transitions: Vec<Transition>,
    index: HashMap<TransitionKey, usize>,
    names: HashMap<(Role, u32), String>,
    code_policy: CodePolicy,
    _catalogs: PhantomData<fn() -> (S, C)>,
}

impl<S: Default, C: Default> WorkflowBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            index: HashMap::new(),
            names: HashMap::new(),
            code_policy: CodePolicy::default(),
            _catalogs: PhantomData,
        }
    }

    /// Choose how code reuse across differently named endpoints is handled.
    pub fn with_code_policy(mut self, policy: CodePolicy) -> Self {
        self.code_policy = policy;
        self
    }

    /// Declare a transition.
    ///
    /// `build` receives an empty draft and must return it with `from`,
    /// `when` and `go_to` applied. It is a required argument, so there is
    /// no way to declare a transition without one:
    ///
    /// ```compile_fail
    /// use flowtable::builder::{TransitionDraft, WorkflowBuilder};
    /// use flowtable::catalog;
    ///
    /// catalog! { struct States {} }
    /// catalog! { struct Commands {} }
    ///
    /// type Draft = TransitionDraft<States, Commands>;
    ///
    /// let _ = WorkflowBuilder::<States, Commands>::new().add(None::<fn(Draft) -> Draft>);
    /// ```
    pub fn add<F>(mut self, build: F) -> Result<Self, ConfigurationError>
    where
        F: FnOnce(TransitionDraft<S, C>) -> TransitionDraft<S, C>,
    {
        let transition = build(TransitionDraft::new()).finish()?;

        self.check_code(Role::State, transition.from())?;
        self.check_code(Role::Trigger, transition.trigger())?;
        self.check_code(Role::State, transition.to())?;

        let key = transition.key();
        match self.index.get(&key) {
            Some(&position) => {
                let existing = &mut self.transitions[position];
                let next = transition.to().clone();
                let previous = existing.redirect(next);
                tracing::debug!(
                    %key,
                    previous = %previous,
                    next = %existing.to(),
                    "transition destination overwritten"
                );
            }
            None => {
                tracing::trace!(%key, %transition, "transition added");
                self.index.insert(key, self.transitions.len());
                self.transitions.push(transition);
            }
        }

        Ok(self)
    }

    /// Freeze the declared transitions into a queryable workflow.
    pub fn build(self) -> Workflow<S, C> {
        tracing::debug!(transitions = self.transitions.len(), "workflow built");
        Workflow::new(self.transitions, self.index)
    }

    fn check_code(&mut self, role: Role, endpoint: &Endpoint) -> Result<(), ConfigurationError> {
        let slot = match self.names.entry((role, endpoint.code())) {
            Entry::Vacant(slot) => {
                slot.insert(endpoint.name().to_owned());
                return Ok(());
            }
            Entry::Occupied(slot) => slot,
        };

        if slot.get() == endpoint.name() {
            return Ok(());
        }

        match self.code_policy {
            CodePolicy::Alias => {
                tracing::warn!(
                    %role,
                    code = endpoint.code(),
                    existing = %slot.get(),
                    incoming = endpoint.name(),
                    "code reused under a different name; endpoints will alias"
                );
                Ok(())
            }
            CodePolicy::Reject => Err(ConfigurationError::ConflictingCode {
                role,
                code: endpoint.code(),
                existing: slot.get().clone(),
                incoming: endpoint.name().to_owned(),
            }),
        }
    }
}

impl<S: Default, C: Default> Default for WorkflowBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::catalog! {
        struct States {
            form_submission = 1 => "Initial submission",
            expert_review = 2 => "Expert review submission",
            supervisor_review = 3 => "Supervisor review submission",
            end = 4 => "Completion",
        }
    }

    crate::catalog! {
        struct Commands {
            approve = 1 => "Approve",
            reject = 2 => "Reject",
        }
    }

    type Builder = WorkflowBuilder<States, Commands>;
    type Draft = TransitionDraft<States, Commands>;

    /// Declares `form_submission --approve--> expert_review`, then `second`.
    fn after_submission<F>(policy: CodePolicy, second: F) -> Result<Builder, ConfigurationError>
    where
        F: FnOnce(Draft) -> Draft,
    {
        Builder::new()
            .with_code_policy(policy)
            .add(|t| {
                t.from(States::form_submission)
                    .when(Commands::approve)
                    .go_to(States::expert_review)
            })?
            .add(second)
    }

    fn redeclared_submission() -> Result<Workflow<States, Commands>, ConfigurationError> {
        Ok(Builder::new()
            .add(|t| {
                t.from(States::form_submission)
                    .when(Commands::approve)
                    .go_to(States::expert_review)
            })?
            .add(|t| {
                t.from(States::expert_review)
                    .when(Commands::reject)
                    .go_to(States::form_submission)
            })?
            .add(|t| {
                t.from(States::form_submission)
                    .when(Commands::approve)
                    .go_to(States::end)
            })?
            .build())
    }

    #[test]
    fn builder_rejects_missing_trigger() {
        let result = Builder::new()
            .add(|t| t.from(States::form_submission).go_to(States::end));

        let error = result.err().unwrap();
        assert_eq!(error, ConfigurationError::MissingTrigger);
        assert!(error.to_string().contains("'If' statement is not defined"));
    }

    #[test]
    fn builder_rejects_missing_from() {
        let result = Builder::new()
            .add(|t| t.when(Commands::approve).go_to(States::end));

        let error = result.err().unwrap();
        let message = error.to_string();
        assert_eq!(error, ConfigurationError::MissingFrom);
        assert!(message.contains("'From' statement is not defined"));
    }

    #[test]
    fn builder_rejects_missing_go_to() {
        let result = Builder::new()
            .add(|t| t.from(States::expert_review).when(Commands::approve));

        let message = result.err().unwrap().to_string();
        assert!(message.contains("'GoTo' statement is not defined"));
    }

    #[test]
    fn empty_builder_produces_empty_workflow() {
        let workflow = Builder::new().build();

        assert!(workflow.is_empty());
        assert_eq!(workflow.len(), 0);
    }

    #[test]
    fn redeclaring_a_pair_overwrites_destination() {
        let workflow = redeclared_submission().unwrap();

        let next = workflow.next_state(States::form_submission, Commands::approve);
        assert_eq!(workflow.len(), 2);
        assert_eq!(next, Some(&States.end()));
    }

    #[test]
    fn overwrite_keeps_declaration_position() {
        let workflow = redeclared_submission().unwrap();

        let destinations: Vec<u32> = workflow.transitions().map(|t| t.to().code()).collect();
        assert_eq!(destinations, vec![4, 1]);
    }

    #[test]
    fn alias_policy_accepts_conflicting_names() {
        let builder = after_submission(CodePolicy::Alias, |t| {
            t.from(|_: &States| Endpoint::new(2, "Another review"))
                .when(Commands::approve)
                .go_to(States::end)
        });

        assert_eq!(builder.unwrap().build().len(), 2);
    }

    #[test]
    fn reject_policy_refuses_conflicting_names() {
        let result = after_submission(CodePolicy::Reject, |t| {
            t.from(|_: &States| Endpoint::new(2, "Another review"))
                .when(Commands::approve)
                .go_to(States::end)
        });

        assert_eq!(
            result.err(),
            Some(ConfigurationError::ConflictingCode {
                role: Role::State,
                code: 2,
                existing: "Expert review submission".to_string(),
                incoming: "Another review".to_string(),
            })
        );
    }

    #[test]
    fn reject_policy_refuses_conflicting_trigger_names() {
        let result = after_submission(CodePolicy::Reject, |t| {
            t.from(States::supervisor_review)
                .when(|_: &Commands| Endpoint::new(1, "Accept"))
                .go_to(States::end)
        });

        assert_eq!(
            result.err(),
            Some(ConfigurationError::ConflictingCode {
                role: Role::Trigger,
                code: 1,
                existing: "Approve".to_string(),
                incoming: "Accept".to_string(),
            })
        );
    }

    #[test]
    fn reject_policy_checks_destinations() {
        let result = after_submission(CodePolicy::Reject, |t| {
            t.from(States::supervisor_review)
                .when(Commands::reject)
                .go_to(|_: &States| Endpoint::new(2, "Another review"))
        });

        assert_eq!(
            result.err(),
            Some(ConfigurationError::ConflictingCode {
                role: Role::State,
                code: 2,
                existing: "Expert review submission".to_string(),
                incoming: "Another review".to_string(),
            })
        );
    }

    #[test]
    fn reject_policy_scopes_codes_by_role() {
        // State 1 and trigger 1 have different names but live in different roles.
        let result = Builder::new()
            .with_code_policy(CodePolicy::Reject)
            .add(|t| {
                t.from(States::form_submission)
                    .when(Commands::approve)
                    .go_to(States::expert_review)
            });

        assert!(result.is_ok());
    }

    #[test]
    fn reject_policy_allows_same_endpoint_twice() {
        let builder = after_submission(CodePolicy::Reject, |t| {
            t.from(States::expert_review)
                .when(Commands::approve)
                .go_to(States::end)
        });

        assert_eq!(builder.unwrap().build().len(), 2);
    }
}
