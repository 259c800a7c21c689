//! Field validators.
//!
//! Every validator inspects a single value and either hands it back or
//! returns [`Error::InvalidArgument`]. They never touch builder state, so a
//! setter that fails validation leaves its builder exactly as it was.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BucketNaming;
use crate::{Error, Result};

/// Lowercase alphanumerics, dots and hyphens, 3 to 63 characters, with an
/// alphanumeric first and last character.
static STRICT_BUCKET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9.\-]{1,61}[a-z0-9]$").expect("valid bucket name pattern")
});

/// Four dot-separated digit groups, whatever their values.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("valid dotted quad pattern")
});

/// Fails if `value` is absent or empty.
pub fn validate_non_empty_string<S>(field: &'static str, value: Option<S>) -> Result<S>
where
    S: AsRef<str>,
{
    match value {
        Some(value) if !value.as_ref().is_empty() => Ok(value),
        Some(_) => Err(Error::invalid_argument(field, "must not be empty")),
        None => Err(Error::invalid_argument(field, "must be set")),
    }
}

/// Fails if `value` is absent.
pub fn validate_not_null<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::invalid_argument(field, "must be set"))
}

/// Fails if `value` lies outside of `min..=max`.
pub fn validate_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(Error::invalid_argument(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }

    Ok(value)
}

/// Fails if `value` is longer than `max` bytes.
pub fn validate_max_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::invalid_argument(
            field,
            format!("must be at most {max} bytes, got {}", value.len()),
        ));
    }

    Ok(())
}

/// Checks a bucket name against the given naming policy.
///
/// [`BucketNaming::Permissive`] only requires a non-empty name.
/// [`BucketNaming::Strict`] applies the S3 bucket naming rules.
pub fn validate_bucket_name(name: &str, naming: BucketNaming) -> Result<()> {
    const FIELD: &str = "bucketName";

    validate_non_empty_string(FIELD, Some(name))?;
    if naming == BucketNaming::Permissive {
        return Ok(());
    }

    if !STRICT_BUCKET_NAME.is_match(name) {
        return Err(Error::invalid_argument(
            FIELD,
            "must be 3 to 63 lowercase letters, digits, dots or hyphens, \
             starting and ending with a letter or digit",
        ));
    }

    if name.contains("..") || name.contains(".-") || name.contains("-.") {
        return Err(Error::invalid_argument(
            FIELD,
            "must not contain '..', '.-' or '-.'",
        ));
    }

    if DOTTED_QUAD.is_match(name) {
        return Err(Error::invalid_argument(
            FIELD,
            "must not be formatted as an IP address",
        ));
    }

    Ok(())
}
