//! Configuration parsing and validation
//!
//! This module turns command-line tokens into a [`Configuration`]
//! and checks it before it is handed to the rest of the tool.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
