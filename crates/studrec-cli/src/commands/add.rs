//! Add command
//!
//! Usage: studrec add --id <ID> --pib <PIB> [--address ..] [--faculty ..] [--email ..]

use clap::Args;
use std::path::Path;

use studrec_core::rules::{parse_student_id, validate_pib};
use studrec_core::{Action, Store, Student};
use studrec_store::StudentGateway;

use crate::render;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Student id (numeric, unique)
    #[arg(long)]
    pub id: String,

    /// Full name (required, non-empty)
    #[arg(long)]
    pub pib: String,

    /// Place of residence
    #[arg(long, default_value = "")]
    pub address: String,

    /// Faculty
    #[arg(long, default_value = "")]
    pub faculty: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Execute add: validate, persist, dispatch on success
pub fn execute(args: AddArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Presentation-side validation, before any dispatch or persistence call
    let id = parse_student_id(&args.id)?;
    validate_pib(&args.pib)?;

    let gateway = StudentGateway::new(db);
    gateway.init_schema()?;

    let mut store = Store::new();
    store.subscribe(render::print_state);

    let student = Student::with_details(
        id,
        args.pib.trim(),
        args.address.trim(),
        args.faculty.trim(),
        args.email.trim(),
    );

    if gateway.create(&student)? {
        // Persisted; now reflect the change in state
        store.dispatch(Action::AddStudent(student));
        Ok(())
    } else {
        // Duplicate key: the store is left unchanged, no dispatch
        Err(format!("This id is used: {}", id).into())
    }
}
