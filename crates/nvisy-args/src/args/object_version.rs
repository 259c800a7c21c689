//! Versioned object arguments.

use serde::Serialize;

use super::bucket::{BucketArgs, BucketScoped};
use super::object::{ObjectArgs, ObjectScoped};
use crate::builder::{ArgsBuilder, Assemble, Staged};
use crate::config::ArgsConfig;
use crate::Result;

/// Arguments addressing an object, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectVersionArgs {
    #[serde(flatten)]
    object: ObjectArgs,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
}

impl ObjectVersionArgs {
    /// Creates a builder using the default configuration.
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::default()
    }
}

impl Assemble for ObjectVersionArgs {
    const KIND: &'static str = "object_version";

    fn assemble(staged: &mut Staged, config: &ArgsConfig) -> Result<Self> {
        let object = ObjectArgs::assemble(staged, config)?;

        Ok(Self {
            object,
            version_id: staged.version_id.take(),
        })
    }
}

/// Records that may address a specific object version.
pub trait VersionScoped: ObjectScoped {
    /// Returns the versioned object layer of this record.
    fn version_args(&self) -> &ObjectVersionArgs;

    /// Returns the version id, if one was set.
    fn version_id(&self) -> Option<&str> {
        self.version_args().version_id.as_deref()
    }
}

impl BucketScoped for ObjectVersionArgs {
    #[inline]
    fn bucket_args(&self) -> &BucketArgs {
        self.object.bucket_args()
    }
}

impl ObjectScoped for ObjectVersionArgs {
    #[inline]
    fn object_args(&self) -> &ObjectArgs {
        &self.object
    }
}

impl VersionScoped for ObjectVersionArgs {
    #[inline]
    fn version_args(&self) -> &ObjectVersionArgs {
        self
    }
}

impl<A: VersionScoped> ArgsBuilder<A> {
    /// Sets or clears the version id.
    ///
    /// Any value is accepted, including `None` and the empty string.
    pub fn version_id(&mut self, version_id: Option<impl Into<String>>) -> &mut Self {
        let version_id: Option<String> = version_id.map(Into::into);
        self.set(move |staged| staged.version_id = version_id)
    }
}
