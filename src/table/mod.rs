//! The query side of a workflow.
//!
//! A [`Workflow`] is what [`WorkflowBuilder::build`] hands back: a read-only
//! table that resolves next states, lists available triggers and looks up
//! endpoints by code. It has no mutating methods, so a built workflow can be
//! shared freely between readers.
//!
//! [`WorkflowBuilder::build`]: crate::builder::WorkflowBuilder::build

mod workflow;

pub use workflow::Workflow;
