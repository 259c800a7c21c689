//! Bucket-level arguments.

use serde::Serialize;

use crate::builder::{ArgsBuilder, Assemble, Staged};
use crate::config::ArgsConfig;
use crate::validate::{validate_bucket_name, validate_non_empty_string};
use crate::Result;

/// Arguments addressing a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketArgs {
    bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_headers: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_query_params: Vec<(String, String)>,
}

impl BucketArgs {
    /// Creates a builder using the default configuration.
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::default()
    }
}

impl Assemble for BucketArgs {
    const KIND: &'static str = "bucket";

    fn assemble(staged: &mut Staged, config: &ArgsConfig) -> Result<Self> {
        let bucket = validate_non_empty_string("bucketName", staged.bucket.take())?;
        validate_bucket_name(&bucket, config.bucket_naming)?;

        Ok(Self {
            bucket,
            region: staged.region.take(),
            extra_headers: std::mem::take(&mut staged.extra_headers),
            extra_query_params: std::mem::take(&mut staged.extra_query_params),
        })
    }
}

/// Records that address a bucket.
pub trait BucketScoped: Assemble {
    /// Returns the bucket layer of this record.
    fn bucket_args(&self) -> &BucketArgs;

    /// Returns the bucket name.
    fn bucket(&self) -> &str {
        &self.bucket_args().bucket
    }

    /// Returns the region, if one was set.
    fn region(&self) -> Option<&str> {
        self.bucket_args().region.as_deref()
    }

    /// Returns extra request headers in the order they were added.
    fn extra_headers(&self) -> &[(String, String)] {
        &self.bucket_args().extra_headers
    }

    /// Returns extra query parameters in the order they were added.
    fn extra_query_params(&self) -> &[(String, String)] {
        &self.bucket_args().extra_query_params
    }
}

impl BucketScoped for BucketArgs {
    #[inline]
    fn bucket_args(&self) -> &BucketArgs {
        self
    }
}

impl<A: BucketScoped> ArgsBuilder<A> {
    /// Sets the bucket name.
    ///
    /// # Errors
    ///
    /// Fails with `bucketName` if the name is empty or breaks the configured
    /// naming policy.
    pub fn bucket(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name: String = name.into();
        let checked = validate_bucket_name(&name, self.config().bucket_naming).map(|()| name);
        self.stage(checked, |staged, name| staged.bucket = Some(name))
    }

    /// Sets the bucket region.
    ///
    /// # Errors
    ///
    /// Fails with `region` if the region is empty.
    pub fn region(&mut self, region: impl Into<String>) -> Result<&mut Self> {
        let region: String = region.into();
        let checked = validate_non_empty_string("region", Some(region));
        self.stage(checked, |staged, region| staged.region = Some(region))
    }

    /// Appends an extra header sent with the request.
    ///
    /// # Errors
    ///
    /// Fails with `extraHeaders` if the header name is empty.
    pub fn extra_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let (name, value): (String, String) = (name.into(), value.into());
        let checked =
            validate_non_empty_string("extraHeaders", Some(name)).map(|name| (name, value));
        self.stage(checked, |staged, header| staged.extra_headers.push(header))
    }

    /// Appends an extra query parameter sent with the request.
    ///
    /// # Errors
    ///
    /// Fails with `extraQueryParams` if the parameter name is empty.
    pub fn extra_query_param(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let (name, value): (String, String) = (name.into(), value.into());
        let checked =
            validate_non_empty_string("extraQueryParams", Some(name)).map(|name| (name, value));
        self.stage(checked, |staged, param| staged.extra_query_params.push(param))
    }
}
