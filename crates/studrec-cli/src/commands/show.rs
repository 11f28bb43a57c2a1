//! Show command
//!
//! Usage: studrec show <ID> [--json]

use clap::Args;
use std::path::Path;

use studrec_core::rules::parse_student_id;
use studrec_core::{Action, Store};
use studrec_store::StudentGateway;

use crate::render;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Student id to look up
    pub id: String,

    /// Print the record as JSON instead of the field layout
    #[arg(long)]
    pub json: bool,
}

/// Execute show: fetch, dispatch LoadStudent, render
pub fn execute(args: ShowArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_student_id(&args.id)?;

    let gateway = StudentGateway::new(db);
    gateway.init_schema()?;

    match gateway.get(id)? {
        Some(student) => {
            let mut store = Store::new();
            if args.json {
                store.dispatch(Action::LoadStudent(student));
                let current = store.state().current_student.as_ref();
                println!("{}", serde_json::to_string_pretty(&current)?);
            } else {
                store.subscribe(render::print_state);
                store.dispatch(Action::LoadStudent(student));
            }
            Ok(())
        }
        None => {
            // Not found is an outcome, not a fault
            println!("No student with id {}", id);
            Ok(())
        }
    }
}
