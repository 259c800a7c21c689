//! Convenient re-exports for common use.

pub use crate::args::{
    BucketArgs, BucketScoped, ObjectArgs, ObjectScoped, ObjectVersionArgs, PresignedObjectUrlArgs,
    VersionScoped,
};
pub use crate::builder::ArgsBuilder;
pub use crate::config::{ArgsConfig, BucketNaming};
pub use crate::error::{Error, Result};
pub use crate::types::{Method, TimeUnit};
