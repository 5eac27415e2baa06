#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

/// Traits supporting implementation of custom claims structs
/// and a reference implementation of the RFC 7519 registered claims.
pub mod claims;

/// Error enums
pub mod error;

/// Functions and traits supporting claim validation.
pub mod validation;

pub use claims::Payload;
pub use error::ClaimError;
pub use validation::{
    ClaimValidator,
    ValidationPipeline,
};
