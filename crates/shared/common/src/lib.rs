//! Common configuration plumbing shared across the workspace.
//!
//! This crate provides:
//! - Configuration error taxonomy
//! - Environment and override-file resolution
//! - Typed field coercion with error collection

pub mod error;
pub mod fields;
pub mod source;

pub use error::{ConfigError, ConfigResult, FieldError};
pub use fields::FieldReader;
pub use source::EnvSource;
