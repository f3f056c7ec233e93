//! Terminal surface: argument parsing, the menu loop and table rendering.

pub mod args;
pub mod menu;
pub mod render;

pub use args::Cli;
pub use menu::MenuSession;
