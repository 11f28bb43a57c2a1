//! Edit command
//!
//! Usage: studrec edit --id <ID> --pib <PIB> [--address ..] [--faculty ..] [--email ..]

use clap::Args;
use std::path::Path;

use studrec_core::rules::{parse_student_id, validate_pib};
use studrec_core::{Action, Store, Student};
use studrec_store::StudentGateway;

use crate::render;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Student id of the record to overwrite (the id itself never changes)
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

/// Execute edit: validate, persist, dispatch on success
pub fn execute(args: EditArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
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

    if gateway.update(&student)? {
        store.dispatch(Action::UpdateStudent(student));
    } else {
        println!("No student with id {}", id);
    }
    Ok(())
}
