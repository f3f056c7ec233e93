//! Error types for the biblioteca session.

use thiserror::Error;

/// Main application error type.
///
/// Every validation variant is a local, recoverable failure: it aborts the
/// current operation only, and its `Display` is the Spanish message shown to
/// the operator at the menu. The variants carry the offending key so log
/// lines and tests can name what was rejected.
#[derive(Error, Debug)]
pub enum AppError {
    /// A catalog insert collided with an existing ISBN.
    #[error("ISBN ya registrado")]
    DuplicateIsbn(String),

    /// A member registration collided with an existing id.
    #[error("ID ya registrado")]
    DuplicateMemberId(String),

    /// A catalog removal named an ISBN that is not in the catalog.
    #[error("ISBN no encontrado")]
    BookNotFound(String),

    /// A deregistration named a member id that is not in the directory.
    #[error("Usuario no encontrado")]
    MemberNotFound(String),

    /// A borrow or return named a member id that is not in the directory.
    #[error("Usuario no registrado")]
    UnknownMember(String),

    /// A borrow named an ISBN that is already out on loan.
    #[error("Libro se encuentra prestado")]
    AlreadyLoaned(String),

    /// A borrow named an ISBN that is not in the catalog.
    #[error("Libro no encontrado")]
    UnknownBook(String),

    /// A return named an ISBN the member does not currently hold.
    #[error("El usuario no tiene prestado ese libro")]
    NotBorrowed { member_id: String, isbn: String },

    /// Terminal or snapshot-file I/O failed.
    #[error("fallo de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be serialized for persistence.
    #[error("fallo de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error reports an operator mistake rather than a broken
    /// session. Operator mistakes are printed at the menu; the rest abort.
    pub fn is_operator_error(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Serialization(_))
    }
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;
