//! Business logic services

pub mod lending;

pub use lending::LendingService;
