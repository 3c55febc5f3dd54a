//! Core infrastructure: type aliases, error handling, collaborator traits,
//! and low-level utilities.

pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{MartError, Result};
