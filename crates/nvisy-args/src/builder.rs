//! Generic builder engine shared by every argument record.
//!
//! Setters validate their own value and push a deferred operation. `build`
//! replays the operations, in call order, onto a zero-valued [`Staged`]
//! record and hands it to the target record's [`Assemble`] implementation,
//! which runs the validation chain from the most general layer down.

use std::fmt;
use std::marker::PhantomData;

use crate::config::ArgsConfig;
use crate::types::Method;
use crate::{Error, Result, TRACING_TARGET_BUILDER, TRACING_TARGET_VALIDATION};

/// Zero-valued staging record that deferred operations are applied to.
#[derive(Debug, Default)]
pub struct Staged {
    pub(crate) bucket: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) extra_headers: Vec<(String, String)>,
    pub(crate) extra_query_params: Vec<(String, String)>,
    pub(crate) object: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) method: Option<Method>,
    pub(crate) expiry: Option<u64>,
}

/// Record that can be assembled from staged fields.
///
/// Implementations call their parent layer's `assemble` before checking
/// their own fields, so the chain always runs most general layer first.
pub trait Assemble: Sized {
    /// Record name used in logs.
    const KIND: &'static str;

    /// Runs the validation chain over `staged` and moves the fields into
    /// a finished record.
    fn assemble(staged: &mut Staged, config: &ArgsConfig) -> Result<Self>;
}

type Operation = Box<dyn FnOnce(&mut Staged) + Send>;

/// Builder for argument records of type `A`.
///
/// Setters are grouped by layer and available on every builder whose record
/// includes that layer, so `ArgsBuilder<PresignedObjectUrlArgs>` offers
/// `bucket`, `object`, `version_id`, `method` and `expiry`. Setters that can
/// fail return `Result<&mut Self>` and leave the builder unchanged on error.
///
/// # Examples
///
/// ```rust
/// use nvisy_args::prelude::*;
///
/// let mut builder = ObjectArgs::builder();
/// assert!(builder.bucket("").is_err());
///
/// let args = builder.bucket("photos")?.object("cat.png")?.build()?;
/// assert_eq!(args.bucket(), "photos");
/// # Ok::<(), nvisy_args::Error>(())
/// ```
pub struct ArgsBuilder<A> {
    operations: Vec<Operation>,
    config: ArgsConfig,
    marker: PhantomData<fn() -> A>,
}

impl<A: Assemble> ArgsBuilder<A> {
    /// Creates a builder that validates against `config`.
    pub fn new(config: ArgsConfig) -> Self {
        Self {
            operations: Vec::new(),
            config,
            marker: PhantomData,
        }
    }

    /// Returns the configuration this builder validates against.
    #[inline]
    pub fn config(&self) -> &ArgsConfig {
        &self.config
    }

    /// Returns the number of staged operations.
    #[inline]
    pub fn staged_operations(&self) -> usize {
        self.operations.len()
    }

    /// Appends a deferred operation.
    pub(crate) fn set(
        &mut self,
        operation: impl FnOnce(&mut Staged) + Send + 'static,
    ) -> &mut Self {
        self.operations.push(Box::new(operation));
        self
    }

    /// Stages `checked` through `apply` if validation succeeded.
    ///
    /// A rejected value is logged and returned without touching the
    /// operation list.
    pub(crate) fn stage<T>(
        &mut self,
        checked: Result<T>,
        apply: fn(&mut Staged, T),
    ) -> Result<&mut Self>
    where
        T: Send + 'static,
    {
        match checked {
            Ok(value) => Ok(self.set(move |staged| apply(staged, value))),
            Err(error) => {
                tracing::debug!(
                    target: TRACING_TARGET_BUILDER,
                    kind = A::KIND,
                    field = error.field(),
                    reason = error.reason(),
                    "Rejected argument"
                );
                Err(error)
            }
        }
    }

    /// Replays the staged operations and validates the result.
    ///
    /// The staged operations are consumed: a builder produces at most one
    /// record, and calling `build` again starts from an empty record.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidArgument`] raised by the
    /// validation chain. The partially staged record is discarded.
    pub fn build(&mut self) -> Result<A> {
        let operations = std::mem::take(&mut self.operations);

        tracing::trace!(
            target: TRACING_TARGET_BUILDER,
            kind = A::KIND,
            operations = operations.len(),
            "Building arguments"
        );

        let mut staged = Staged::default();
        for operation in operations {
            operation(&mut staged);
        }

        A::assemble(&mut staged, &self.config).inspect_err(|error: &Error| {
            tracing::debug!(
                target: TRACING_TARGET_VALIDATION,
                kind = A::KIND,
                field = error.field(),
                reason = error.reason(),
                "Argument validation failed"
            );
        })
    }
}

impl<A: Assemble> Default for ArgsBuilder<A> {
    fn default() -> Self {
        Self::new(ArgsConfig::default())
    }
}

impl<A: Assemble> fmt::Debug for ArgsBuilder<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgsBuilder")
            .field("kind", &A::KIND)
            .field("operations", &self.operations.len())
            .field("config", &self.config)
            .finish()
    }
}
