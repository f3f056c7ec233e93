//! Biblioteca - Digital Library Management System
//!
//! A Rust implementation of the UEA digital library manager: a book catalog,
//! a member directory and a loan ledger persisted as JSON snapshot files,
//! driven by an interactive terminal menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::Library;
