//! Presigned object URL arguments.

use std::time::Duration;

use jiff::SignedDuration;
use serde::Serialize;

use super::bucket::{BucketArgs, BucketScoped};
use super::object::{ObjectArgs, ObjectScoped};
use super::object_version::{ObjectVersionArgs, VersionScoped};
use crate::builder::{ArgsBuilder, Assemble, Staged};
use crate::config::ArgsConfig;
use crate::types::{Method, TimeUnit};
use crate::validate::{validate_not_null, validate_range};
use crate::Result;

/// Longest accepted presigned URL expiry: 100 years of 365 days, in seconds.
pub const MAX_EXPIRY: u64 = 100 * 365 * 24 * 60 * 60;

/// Expiry used when none is set.
pub const DEFAULT_EXPIRY: u64 = MAX_EXPIRY;

/// Arguments for generating a presigned object URL.
///
/// # Examples
///
/// ```rust
/// use nvisy_args::prelude::*;
///
/// let args = PresignedObjectUrlArgs::builder()
///     .bucket("photos")?
///     .object("cat.png")?
///     .method(Method::Get)
///     .expiry_in(7, TimeUnit::Days)?
///     .build()?;
///
/// assert_eq!(args.expiry(), 604_800);
/// # Ok::<(), nvisy_args::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedObjectUrlArgs {
    #[serde(flatten)]
    version: ObjectVersionArgs,
    method: Method,
    expiry: u64,
}

impl PresignedObjectUrlArgs {
    /// Creates a builder using the default configuration.
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::default()
    }

    /// Returns the HTTP method the URL is signed for.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the URL lifetime in seconds.
    #[inline]
    pub fn expiry(&self) -> u64 {
        self.expiry
    }

    /// Returns the URL lifetime.
    #[inline]
    pub fn expiry_duration(&self) -> Duration {
        Duration::from_secs(self.expiry)
    }
}

impl Assemble for PresignedObjectUrlArgs {
    const KIND: &'static str = "presigned_object_url";

    fn assemble(staged: &mut Staged, config: &ArgsConfig) -> Result<Self> {
        let version = ObjectVersionArgs::assemble(staged, config)?;
        let method = validate_not_null("method", staged.method.take())?;

        Ok(Self {
            version,
            method,
            expiry: staged.expiry.take().unwrap_or(DEFAULT_EXPIRY),
        })
    }
}

impl BucketScoped for PresignedObjectUrlArgs {
    #[inline]
    fn bucket_args(&self) -> &BucketArgs {
        self.version.bucket_args()
    }
}

impl ObjectScoped for PresignedObjectUrlArgs {
    #[inline]
    fn object_args(&self) -> &ObjectArgs {
        self.version.object_args()
    }
}

impl VersionScoped for PresignedObjectUrlArgs {
    #[inline]
    fn version_args(&self) -> &ObjectVersionArgs {
        &self.version
    }
}

impl ArgsBuilder<PresignedObjectUrlArgs> {
    /// Sets the HTTP method the URL is signed for.
    pub fn method(&mut self, method: Method) -> &mut Self {
        self.set(move |staged| staged.method = Some(method))
    }

    /// Sets the URL lifetime in seconds.
    ///
    /// # Errors
    ///
    /// Fails with `expiry` unless `1 <= seconds <= MAX_EXPIRY`.
    pub fn expiry(&mut self, seconds: i64) -> Result<&mut Self> {
        let checked = validate_range("expiry", seconds, 1, MAX_EXPIRY as i64)
            .map(|seconds| seconds.unsigned_abs());
        self.stage(checked, |staged, seconds| staged.expiry = Some(seconds))
    }

    /// Sets the URL lifetime as `duration` of `unit`, truncated to whole
    /// seconds.
    ///
    /// # Errors
    ///
    /// Fails with `expiry` if the truncated value is out of range.
    pub fn expiry_in(&mut self, duration: i64, unit: TimeUnit) -> Result<&mut Self> {
        self.expiry(unit.to_seconds(duration))
    }

    /// Sets the URL lifetime from a [`Duration`], dropping sub-second
    /// precision.
    ///
    /// # Errors
    ///
    /// Fails with `expiry` if the truncated value is out of range.
    pub fn expiry_duration(&mut self, duration: Duration) -> Result<&mut Self> {
        self.expiry(i64::try_from(duration.as_secs()).unwrap_or(i64::MAX))
    }

    /// Sets the URL lifetime from a [`SignedDuration`], truncating toward
    /// zero.
    ///
    /// # Errors
    ///
    /// Fails with `expiry` if the truncated value is out of range.
    pub fn expiry_signed(&mut self, duration: SignedDuration) -> Result<&mut Self> {
        self.expiry(duration.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn staged_builder() -> ArgsBuilder<PresignedObjectUrlArgs> {
        let mut builder = PresignedObjectUrlArgs::builder();
        builder.bucket("photos").unwrap().object("cat.png").unwrap();
        builder
    }

    #[test]
    fn test_max_expiry_is_one_hundred_years() {
        assert_eq!(MAX_EXPIRY, 3_153_600_000);
        assert_eq!(DEFAULT_EXPIRY, MAX_EXPIRY);
    }

    #[test]
    fn test_presigned_put_scenario() {
        let args = PresignedObjectUrlArgs::builder()
            .bucket("photos")
            .unwrap()
            .object("cat.png")
            .unwrap()
            .method(Method::Put)
            .expiry(3600)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(args.bucket(), "photos");
        assert_eq!(args.object(), "cat.png");
        assert!(args.version_id().is_none());
        assert_eq!(args.method(), Method::Put);
        assert_eq!(args.expiry(), 3600);
        assert_eq!(args.expiry_duration(), Duration::from_secs(3600));
    }

    #[test]
    fn test_default_expiry() {
        let args = staged_builder().method(Method::Get).build().unwrap();
        assert_eq!(args.expiry(), MAX_EXPIRY);
    }

    #[test]
    fn test_missing_method() {
        let error = staged_builder().build().unwrap_err();
        assert_eq!(error.field(), "method");
    }

    #[test]
    fn test_object_error_reported_before_method() {
        let error = PresignedObjectUrlArgs::builder()
            .bucket("photos")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(error.field(), "objectName");

        let error = PresignedObjectUrlArgs::builder().build().unwrap_err();
        assert_eq!(error.field(), "bucketName");
    }

    #[test]
    fn test_expiry_bounds() {
        let mut builder = staged_builder();
        let staged = builder.staged_operations();

        for seconds in [0, -1, i64::MIN, MAX_EXPIRY as i64 + 1, i64::MAX] {
            let error = builder.expiry(seconds).unwrap_err();
            assert_eq!(error.field(), "expiry");
        }
        assert_eq!(builder.staged_operations(), staged);

        assert!(builder.expiry(1).is_ok());
        assert!(builder.expiry(MAX_EXPIRY as i64).is_ok());
    }

    #[test]
    fn test_expiry_last_write_wins() {
        let args = staged_builder()
            .method(Method::Get)
            .expiry(60)
            .unwrap()
            .expiry(120)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(args.expiry(), 120);
    }

    #[test]
    fn test_expiry_in_units() {
        let args = staged_builder()
            .method(Method::Get)
            .expiry_in(7, TimeUnit::Days)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(args.expiry(), 604_800);

        let args = staged_builder()
            .method(Method::Get)
            .expiry_in(1_999, TimeUnit::Milliseconds)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(args.expiry(), 1);
    }

    #[test]
    fn test_expiry_in_truncation_rejects_sub_second() {
        let error = staged_builder()
            .expiry_in(999, TimeUnit::Milliseconds)
            .unwrap_err();
        assert_eq!(error.field(), "expiry");

        let error = staged_builder()
            .expiry_in(36_501, TimeUnit::Days)
            .unwrap_err();
        assert_eq!(error.field(), "expiry");
    }

    #[test]
    fn test_expiry_from_durations() {
        let args = staged_builder()
            .method(Method::Head)
            .expiry_duration(Duration::from_millis(90_500))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(args.expiry(), 90);

        let args = staged_builder()
            .method(Method::Delete)
            .expiry_signed(SignedDuration::from_mins(15))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(args.expiry(), 900);

        assert!(staged_builder().expiry_duration(Duration::ZERO).is_err());
        assert!(staged_builder().expiry_duration(Duration::MAX).is_err());
        assert!(
            staged_builder()
                .expiry_signed(SignedDuration::from_secs(-10))
                .is_err()
        );
    }

    #[test]
    fn test_version_passes_through() {
        let args = staged_builder()
            .version_id(Some("v42"))
            .method(Method::Get)
            .build()
            .unwrap();
        assert_eq!(args.version_id(), Some("v42"));
    }

    #[test]
    fn test_serialize() {
        let args = staged_builder()
            .method(Method::Put)
            .expiry(3600)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bucket": "photos",
                "object": "cat.png",
                "method": "PUT",
                "expiry": 3600,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_in_range_expiry_round_trips(seconds in 1..=MAX_EXPIRY as i64) {
            let args = staged_builder()
                .method(Method::Get)
                .expiry(seconds)
                .unwrap()
                .build()
                .unwrap();
            prop_assert_eq!(args.expiry(), seconds as u64);
        }

        #[test]
        fn prop_out_of_range_expiry_rejected(
            seconds in prop_oneof![i64::MIN..1, (MAX_EXPIRY as i64 + 1)..=i64::MAX]
        ) {
            let mut builder = staged_builder();
            let error = builder.expiry(seconds).unwrap_err();
            prop_assert_eq!(error.field(), "expiry");
            prop_assert_eq!(builder.staged_operations(), 2);
        }
    }
}
