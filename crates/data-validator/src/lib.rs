//! Address Input Validation
//!
//! Checks label length and coordinate bounds before anything is written.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, Validator};
