//! Object-level arguments.

use serde::Serialize;

use super::bucket::{BucketArgs, BucketScoped};
use crate::builder::{ArgsBuilder, Assemble, Staged};
use crate::config::ArgsConfig;
use crate::validate::{validate_max_len, validate_non_empty_string};
use crate::Result;

/// Arguments addressing an object inside a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectArgs {
    #[serde(flatten)]
    bucket: BucketArgs,
    object: String,
}

impl ObjectArgs {
    /// Creates a builder using the default configuration.
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::default()
    }
}

/// Checks an object name against the non-empty rule and the configured
/// length limit.
fn check_object_name(name: Option<String>, config: &ArgsConfig) -> Result<String> {
    let name = validate_non_empty_string("objectName", name)?;
    if let Some(max) = config.max_object_name_len {
        validate_max_len("objectName", &name, max.get())?;
    }

    Ok(name)
}

impl Assemble for ObjectArgs {
    const KIND: &'static str = "object";

    fn assemble(staged: &mut Staged, config: &ArgsConfig) -> Result<Self> {
        let bucket = BucketArgs::assemble(staged, config)?;
        let object = check_object_name(staged.object.take(), config)?;

        Ok(Self { bucket, object })
    }
}

/// Records that address an object.
pub trait ObjectScoped: BucketScoped {
    /// Returns the object layer of this record.
    fn object_args(&self) -> &ObjectArgs;

    /// Returns the object name.
    fn object(&self) -> &str {
        &self.object_args().object
    }
}

impl BucketScoped for ObjectArgs {
    #[inline]
    fn bucket_args(&self) -> &BucketArgs {
        &self.bucket
    }
}

impl ObjectScoped for ObjectArgs {
    #[inline]
    fn object_args(&self) -> &ObjectArgs {
        self
    }
}

impl<A: ObjectScoped> ArgsBuilder<A> {
    /// Sets the object name.
    ///
    /// # Errors
    ///
    /// Fails with `objectName` if the name is empty or longer than the
    /// configured limit.
    pub fn object(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let checked = check_object_name(Some(name.into()), self.config());
        self.stage(checked, |staged, name| staged.object = Some(name))
    }
}
