pub mod validation;

pub use validation::{parse_student_id, validate_pib};
