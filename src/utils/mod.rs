//! Utility functions.
//!
//! - [`code_generator`] - Short code generation and custom code validation

pub mod code_generator;
