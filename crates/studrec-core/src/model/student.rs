use serde::{Deserialize, Serialize};

/// Student - one record in the registry
///
/// A Student is identified by a caller-supplied integer id that is unique and
/// immutable once created. `pib` (the full name) is required and must be
/// non-empty; the remaining fields are optional free text and default to the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, primary key in the datastore
    pub id: i64,

    /// Full name (required, non-empty; enforced by the caller before persistence)
    pub pib: String,

    /// Place of residence
    #[serde(default)]
    pub address: String,

    /// Faculty
    #[serde(default)]
    pub faculty: String,

    /// Contact email
    #[serde(default)]
    pub email: String,
}

impl Student {
    /// Create a new Student with the given id and full name
    ///
    /// The optional fields start empty; fill them directly or via [`Student::with_details`].
    pub fn new(id: i64, pib: impl Into<String>) -> Self {
        Self {
            id,
            pib: pib.into(),
            address: String::new(),
            faculty: String::new(),
            email: String::new(),
        }
    }

    /// Create a Student with all five fields populated
    pub fn with_details(
        id: i64,
        pib: impl Into<String>,
        address: impl Into<String>,
        faculty: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            pib: pib.into(),
            address: address.into(),
            faculty: faculty.into(),
            email: email.into(),
        }
    }

    /// Check whether the required full name is present
    pub fn has_pib(&self) -> bool {
        !self.pib.trim().is_empty()
    }
}
