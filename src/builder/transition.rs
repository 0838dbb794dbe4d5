//! Per-transition draft used inside [`WorkflowBuilder::add`].
//!
//! [`WorkflowBuilder::add`]: crate::builder::WorkflowBuilder::add

use crate::builder::error::ConfigurationError;
use crate::core::{Endpoint, Transition};
use std::marker::PhantomData;

/// Fluent draft of a single transition.
///
/// Each step builds a fresh catalog with `Default` and applies the selector
/// to it. The order of `from` and `when` does not matter. All three steps
/// must have run by the time the draft is committed.
pub struct TransitionDraft<S, C> {
    from: Option<Endpoint>,
    trigger: Option<Endpoint>,
    to: Option<Endpoint>,
    _catalogs: PhantomData<fn() -> (S, C)>,
}

impl<S: Default, C: Default> TransitionDraft<S, C> {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self {
            from: None,
            trigger: None,
            to: None,
            _catalogs: PhantomData,
        }
    }

    /// Set the current state (required).
    pub fn from<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(&S) -> Endpoint,
    {
        self.from = Some(selector(&S::default()));
        self
    }

    /// Set the trigger (required).
    pub fn when<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(&C) -> Endpoint,
    {
        self.trigger = Some(selector(&C::default()));
        self
    }

    /// Set the next state (required). This is the final step.
    pub fn go_to<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(&S) -> Endpoint,
    {
        self.to = Some(selector(&S::default()));
        self
    }
}

impl<S, C> TransitionDraft<S, C> {
    /// Validate the draft and turn it into a transition record.
    ///
    /// The trigger is checked before the current state.
    pub(crate) fn finish(self) -> Result<Transition, ConfigurationError> {
        let trigger = self.trigger.ok_or(ConfigurationError::MissingTrigger)?;
        let from = self.from.ok_or(ConfigurationError::MissingFrom)?;
        let to = self.to.ok_or(ConfigurationError::MissingGoTo)?;

        Ok(Transition::new(from, trigger, to))
    }
}

impl<S: Default, C: Default> Default for TransitionDraft<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
