use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error taxonomy for the state-management core
///
/// These are caller-side rejections raised before any dispatch or persistence
/// call. The Store itself never fails; persistence faults live in
/// `studrec-store`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Student id is missing or not a number
    #[error("Invalid student id: {input:?} is not a number")]
    InvalidId { input: String },

    /// Required full name is empty
    #[error("Full name (PIB) must not be empty")]
    EmptyPib,
}
