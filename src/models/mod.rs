//! Data models for the biblioteca

pub mod book;
pub mod category;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::Book;
pub use category::Category;
pub use loan::Loan;
pub use member::Member;
