#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for builder setters and assembly.
pub const TRACING_TARGET_BUILDER: &str = "nvisy_args::builder";

/// Tracing target for validation chain failures.
pub const TRACING_TARGET_VALIDATION: &str = "nvisy_args::validation";

mod builder;
mod config;
mod error;

pub mod args;
pub mod prelude;
pub mod types;
pub mod validate;

pub use crate::args::{
    BucketArgs, BucketExistsArgs, BucketScoped, DEFAULT_EXPIRY, GetPresignedObjectUrlArgs,
    MAX_EXPIRY, ObjectArgs, ObjectScoped, ObjectVersionArgs, PresignedObjectUrlArgs,
    RemoveBucketArgs, RemoveObjectArgs, StatObjectArgs, VersionScoped,
};
pub use crate::builder::ArgsBuilder;
pub use crate::config::{ArgsConfig, ArgsConfigBuilder, ArgsConfigBuilderError, BucketNaming};
pub use crate::error::{Error, Result};
pub use crate::types::{Method, TimeUnit};
