//! Frozen, queryable transition table.

use crate::core::{Endpoint, Transition, TransitionKey};
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

/// An immutable transition table over state catalog `S` and trigger
/// catalog `C`.
///
/// A workflow holds no current state. Every query stands alone, and
/// callers carry the state they are in from one call to the next. A
/// missing transition, trigger or state is `None`, never an error.
pub struct Workflow<S, C> {
    transitions: Vec<Transition>,
    index: HashMap<TransitionKey, usize>,
    _catalogs: PhantomData<fn() -> (S, C)>,
}

impl<S, C> Workflow<S, C> {
    pub(crate) fn new(transitions: Vec<Transition>, index: HashMap<TransitionKey, usize>) -> Self {
        Self {
            transitions,
            index,
            _catalogs: PhantomData,
        }
    }

    /// Number of distinct `(from, trigger)` pairs.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition was declared.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    /// Resolve the next state from raw codes.
    ///
    /// Scans the records rather than using the key index, so it serves
    /// codes coming from untyped sources.
    pub fn next_state_by_code(&self, state: u32, trigger: u32) -> Option<&Endpoint> {
        self.transitions
            .iter()
            .find(|t| t.from().code() == state && t.trigger().code() == trigger)
            .map(Transition::to)
    }

    /// First trigger with the given code.
    pub fn trigger_by_code(&self, code: u32) -> Option<&Endpoint> {
        self.transitions
            .iter()
            .map(Transition::trigger)
            .find(|trigger| trigger.code() == code)
    }

    /// First state with the given code.
    ///
    /// Each record's current state is checked before its next state.
    pub fn state_by_code(&self, code: u32) -> Option<&Endpoint> {
        self.transitions
            .iter()
            .flat_map(|t| [t.from(), t.to()])
            .find(|state| state.code() == code)
    }

    /// Every distinct trigger in the table, in first-seen order.
    pub fn available_triggers(&self) -> Vec<&Endpoint> {
        distinct_triggers(self.transitions.iter())
    }

    fn lookup(&self, key: &TransitionKey) -> Option<&Endpoint> {
        self.index
            .get(key)
            .and_then(|&position| self.transitions.get(position))
            .map(Transition::to)
    }
}

impl<S: Default, C: Default> Workflow<S, C> {
    /// Resolve the next state through catalog selectors.
    ///
    /// ```rust
    /// use flowtable::builder::WorkflowBuilder;
    /// use flowtable::catalog;
    ///
    /// catalog! {
    ///     struct Lights {
    ///         red = 1 => "Red",
    ///         green = 2 => "Green",
    ///     }
    /// }
    ///
    /// catalog! {
    ///     struct Signals {
    ///         timer = 1 => "Timer",
    ///         fault = 2 => "Fault",
    ///     }
    /// }
    ///
    /// let workflow = WorkflowBuilder::<Lights, Signals>::new()
    ///     .add(|t| t.from(Lights::red).when(Signals::timer).go_to(Lights::green))
    ///     .unwrap()
    ///     .build();
    ///
    /// let next = workflow.next_state(Lights::red, Signals::timer);
    /// assert_eq!(next.map(|s| s.name()), Some("Green"));
    /// assert!(workflow.next_state(Lights::red, Signals::fault).is_none());
    /// ```
    pub fn next_state<F, G>(&self, from: F, trigger: G) -> Option<&Endpoint>
    where
        F: FnOnce(&S) -> Endpoint,
        G: FnOnce(&C) -> Endpoint,
    {
        if self.is_empty() {
            return None;
        }

        let from = from(&S::default());
        let trigger = trigger(&C::default());
        self.lookup(&TransitionKey::new(&from, &trigger))
    }

    /// Distinct triggers leaving the selected state, in first-seen order.
    pub fn available_triggers_from<F>(&self, from: F) -> Vec<&Endpoint>
    where
        F: FnOnce(&S) -> Endpoint,
    {
        if self.is_empty() {
            return Vec::new();
        }

        let from = from(&S::default());
        distinct_triggers(self.transitions.iter().filter(|t| *t.from() == from))
    }
}

fn distinct_triggers<'a>(transitions: impl Iterator<Item = &'a Transition>) -> Vec<&'a Endpoint> {
    let mut seen = HashSet::new();
    transitions
        .map(Transition::trigger)
        .filter(|trigger| seen.insert(trigger.code()))
        .collect()
}
