//! Argument records and their layer traits.
//!
//! Each record embeds the record of the layer above it:
//!
//! ```text
//! BucketArgs                 bucket, region, extra headers/query params
//! └── ObjectArgs             + object
//!     └── ObjectVersionArgs  + version id
//!         └── PresignedObjectUrlArgs  + method, expiry
//! ```
//!
//! The layer traits ([`BucketScoped`], [`ObjectScoped`], [`VersionScoped`])
//! expose the inherited accessors and gate the builder setters of each layer.

mod bucket;
mod object;
mod object_version;
mod presigned;

pub use bucket::{BucketArgs, BucketScoped};
pub use object::{ObjectArgs, ObjectScoped};
pub use object_version::{ObjectVersionArgs, VersionScoped};
pub use presigned::{DEFAULT_EXPIRY, MAX_EXPIRY, PresignedObjectUrlArgs};

/// Arguments of a bucket existence check.
pub type BucketExistsArgs = BucketArgs;

/// Arguments of a bucket removal.
pub type RemoveBucketArgs = BucketArgs;

/// Arguments of an object metadata lookup.
pub type StatObjectArgs = ObjectVersionArgs;

/// Arguments of an object removal.
pub type RemoveObjectArgs = ObjectVersionArgs;

/// Arguments of a presigned object URL request.
pub type GetPresignedObjectUrlArgs = PresignedObjectUrlArgs;
