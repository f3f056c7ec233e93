//! Loan (borrow) model.

use serde::{Deserialize, Serialize};

use super::book::Book;

/// An active loan: the borrowing member's id and a copy of the book as it
/// stood at borrow time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "Usuario")]
    pub member_id: String,
    #[serde(rename = "Libro")]
    pub book: Book,
}
