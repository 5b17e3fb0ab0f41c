pub mod bank;
pub mod core;

// Re-export the main types for convenience
pub use bank::{ContentBank, DrawBank};
pub use core::{Category, TextCollection};
