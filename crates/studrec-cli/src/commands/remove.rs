//! Remove command
//!
//! Usage: studrec remove <ID>

use clap::Args;
use std::path::Path;

use studrec_core::rules::parse_student_id;
use studrec_core::{Action, Store};
use studrec_store::StudentGateway;

use crate::render;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Student id to delete
    pub id: String,
}

/// Execute remove: delete the row, dispatch on success
pub fn execute(args: RemoveArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_student_id(&args.id)?;

    let gateway = StudentGateway::new(db);
    gateway.init_schema()?;

    if gateway.delete(id)? {
        let mut store = Store::new();
        store.subscribe(render::print_state);
        store.dispatch(Action::DeleteStudent(id));
        println!("Removed student {}", id);
    } else {
        println!("No student with id {}", id);
    }
    Ok(())
}
