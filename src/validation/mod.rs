//! Provides claim validation functionality
pub(crate) mod validator;

pub use pipeline::{
    ValidationPipeline,
    ValidationPipelineBuilder,
};
pub use validator::ClaimValidator;

mod pipeline;
