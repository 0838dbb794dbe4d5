//! Review Approval Workflow
//!
//! This example wires a multi-stage review process and walks a request
//! through it.
//!
//! Key concepts:
//! - Catalogs declared with `catalog!`
//! - Fluent `from / when / go_to` wiring
//! - Callers thread the current state themselves
//! - Missing transitions are `None`, not errors
//!
//! Run with: RUST_LOG=flowtable=trace cargo run --example review_workflow

use flowtable::builder::{ConfigurationError, WorkflowBuilder};
use flowtable::catalog;
use flowtable::table::Workflow;
use tracing_subscriber::EnvFilter;

catalog! {
    struct ReviewStates {
        form_submission = 1 => "Initial submission",
        expert_review = 2 => "Expert review submission",
        supervisor_review = 3 => "Supervisor review submission",
        end = 4 => "Completion",
    }
}

catalog! {
    struct ReviewCommands {
        approve = 1 => "Approve",
        reject = 2 => "Reject",
        return_back = 3 => "Return",
    }
}

fn review_workflow() -> Result<Workflow<ReviewStates, ReviewCommands>, ConfigurationError> {
    Ok(WorkflowBuilder::<ReviewStates, ReviewCommands>::new()
        .add(|t| {
            t.from(ReviewStates::form_submission)
                .when(ReviewCommands::approve)
                .go_to(ReviewStates::expert_review)
        })?
        .add(|t| {
            t.from(ReviewStates::expert_review)
                .when(ReviewCommands::approve)
                .go_to(ReviewStates::supervisor_review)
        })?
        .add(|t| {
            t.from(ReviewStates::supervisor_review)
                .when(ReviewCommands::approve)
                .go_to(ReviewStates::end)
        })?
        .add(|t| {
            t.from(ReviewStates::supervisor_review)
                .when(ReviewCommands::reject)
                .go_to(ReviewStates::end)
        })?
        .add(|t| {
            t.from(ReviewStates::supervisor_review)
                .when(ReviewCommands::return_back)
                .go_to(ReviewStates::expert_review)
        })?
        .add(|t| {
            t.from(ReviewStates::expert_review)
                .when(ReviewCommands::return_back)
                .go_to(ReviewStates::form_submission)
        })?
        .build())
}

fn main() -> Result<(), ConfigurationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Review Approval Workflow ===\n");

    let workflow = review_workflow()?;
    println!("Declared {} transitions:", workflow.len());
    for transition in workflow.transitions() {
        println!("  {}", transition);
    }

    let mut current = ReviewStates.form_submission();
    println!("\nStarting in {}", current);

    for command in [1, 3, 1, 1, 2, 1] {
        let Some(trigger) = workflow.trigger_by_code(command) else {
            println!("  Unknown command {}", command);
            continue;
        };

        let options: Vec<&str> = workflow
            .available_triggers_from(|_: &ReviewStates| current.clone())
            .into_iter()
            .map(|t| t.name())
            .collect();

        match workflow.next_state_by_code(current.code(), trigger.code()) {
            Some(next) => {
                println!("  {} -> {}", trigger.name(), next);
                current = next.clone();
            }
            None => println!(
                "  {} is not allowed from {} (allowed: {})",
                trigger.name(),
                current.name(),
                options.join(", ")
            ),
        }
    }

    println!("\nFinished in {}", current);
    Ok(())
}
