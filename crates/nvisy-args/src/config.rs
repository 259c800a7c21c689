//! Validation configuration shared by argument builders.

use std::num::NonZeroUsize;

#[cfg(feature = "config")]
use clap::{Args, ValueEnum};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Bucket naming policy applied by bucket-level setters and assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "config", derive(ValueEnum))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BucketNaming {
    /// Any non-empty name is accepted.
    #[default]
    Permissive,
    /// S3 bucket naming rules are enforced.
    Strict,
}

/// Configuration of the optional checks performed by argument builders.
///
/// The default configuration enforces only the base contract: non-empty
/// bucket and object names.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use nvisy_args::{ArgsConfig, BucketNaming};
///
/// let config = ArgsConfig::builder()
///     .with_bucket_naming(BucketNaming::Strict)
///     .with_max_object_name_len(NonZeroUsize::new(1024).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.bucket_naming, BucketNaming::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(pattern = "owned", setter(into, strip_option, prefix = "with"))]
pub struct ArgsConfig {
    /// Bucket naming policy.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "bucket-naming",
            env = "NVISY_ARGS_BUCKET_NAMING",
            value_enum,
            default_value = "permissive"
        )
    )]
    #[builder(default)]
    #[serde(default)]
    pub bucket_naming: BucketNaming,

    /// Maximum object name length in bytes, unbounded when unset.
    #[cfg_attr(
        feature = "config",
        arg(long = "max-object-name-len", env = "NVISY_ARGS_MAX_OBJECT_NAME_LEN")
    )]
    #[builder(default)]
    #[serde(default)]
    pub max_object_name_len: Option<NonZeroUsize>,
}

/// S3 object key limit in bytes.
const S3_MAX_OBJECT_NAME_LEN: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

impl ArgsConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ArgsConfigBuilder {
        ArgsConfigBuilder::default()
    }

    /// Returns a configuration enforcing S3 bucket naming rules and the
    /// 1024-byte S3 object key limit.
    pub fn strict() -> Self {
        Self {
            bucket_naming: BucketNaming::Strict,
            max_object_name_len: Some(S3_MAX_OBJECT_NAME_LEN),
        }
    }
}
