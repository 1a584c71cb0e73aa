//! Asynchronous per-field validation
//!
//! A validation pass attempts every row. Each row runs its field validators
//! one after another in record order and stops at the first rejection; the
//! pass as a whole never stops early, so a report always covers every row.
//! Row futures are polled on the caller's task, no runtime is spawned.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::{stream, FutureExt, StreamExt};

use crate::error::{AggregateValidationError, TableError, TableResult, ValidationError};
use crate::options::ValidateOptions;
use crate::table::Table;
use crate::value::{FieldValue, Record};

/// Where a value being validated comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    /// 0-based record index
    pub row: usize,
    /// Field name
    pub field: String,
}

/// An asynchronous check or transformation of one field value
///
/// Implemented for any `Fn(FieldValue, FieldContext) -> impl Future` that
/// resolves to the (possibly replaced) value or a [`ValidationError`].
pub trait Validator: Send + Sync {
    /// Validate a value, returning the value to store in its place
    fn validate(
        &self,
        value: FieldValue,
        ctx: FieldContext,
    ) -> BoxFuture<'static, Result<FieldValue, ValidationError>>;
}

impl<F, Fut> Validator for F
where
    F: Fn(FieldValue, FieldContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FieldValue, ValidationError>> + Send + 'static,
{
    fn validate(
        &self,
        value: FieldValue,
        ctx: FieldContext,
    ) -> BoxFuture<'static, Result<FieldValue, ValidationError>> {
        self(value, ctx).boxed()
    }
}

/// Field name to validator
#[derive(Clone, Default)]
pub struct Validators {
    validators: BTreeMap<String, Arc<dyn Validator>>,
}

impl Validators {
    /// Create an empty validator set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an async function as the validator for a field, builder style
    ///
    /// # Examples
    /// ```
    /// use gridtab_table::{FieldValue, ValidationError, Validators};
    ///
    /// let validators = Validators::new().with("age", |value: FieldValue, _ctx| async move {
    ///     if value.is_nan() {
    ///         Err(ValidationError::new("age is not a number"))
    ///     } else {
    ///         Ok(value)
    ///     }
    /// });
    /// assert!(validators.contains("age"));
    /// ```
    pub fn with<S, F, Fut>(mut self, field: S, validator: F) -> Self
    where
        S: Into<String>,
        F: Fn(FieldValue, FieldContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FieldValue, ValidationError>> + Send + 'static,
    {
        self.insert(field, validator);
        self
    }

    /// Register an async function as the validator for a field, replacing any previous one
    pub fn insert<S, F, Fut>(&mut self, field: S, validator: F)
    where
        S: Into<String>,
        F: Fn(FieldValue, FieldContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FieldValue, ValidationError>> + Send + 'static,
    {
        self.insert_validator(field, validator);
    }

    /// Register any [`Validator`] implementation for a field
    pub fn insert_validator<S, V>(&mut self, field: S, validator: V)
    where
        S: Into<String>,
        V: Validator + 'static,
    {
        self.validators.insert(field.into(), Arc::new(validator));
    }

    /// Get the validator for a field
    pub fn get(&self, field: &str) -> Option<&dyn Validator> {
        self.validators.get(field).map(|v| v.as_ref())
    }

    /// Check if a field has a validator
    pub fn contains(&self, field: &str) -> bool {
        self.validators.contains_key(field)
    }

    /// Number of registered validators
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if no validator is registered
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

/// Outcome of a validation pass that keeps the rows that passed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Validated rows that passed, in original order, with the original headers
    pub table: Table,
    /// Rejections keyed by 0-based row index
    pub failures: BTreeMap<usize, ValidationError>,
}

impl ValidationReport {
    /// Check if every row passed
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// The validated table, or every failure if any row was rejected
    pub fn into_result(self) -> TableResult<Table> {
        if self.failures.is_empty() {
            Ok(self.table)
        } else {
            Err(TableError::Validation(AggregateValidationError::new(
                self.failures,
            )))
        }
    }
}

impl Table {
    /// Validate every row, failing if any row was rejected
    ///
    /// The error is raised only after every row has settled and carries one
    /// entry per failed row. The original table is not modified.
    pub async fn validate(
        &self,
        validators: &Validators,
        options: &ValidateOptions,
    ) -> TableResult<Table> {
        self.validate_partial(validators, options).await.into_result()
    }

    /// Validate every row, keeping the rows that passed next to the failures
    pub async fn validate_partial(
        &self,
        validators: &Validators,
        options: &ValidateOptions,
    ) -> ValidationReport {
        tracing::debug!(
            "Validating {} rows ({})",
            self.len(),
            if options.parallel { "parallel" } else { "sequential" }
        );

        let outcomes: Vec<(usize, Result<Record, ValidationError>)> = if options.parallel {
            let limit = options.concurrency.unwrap_or(self.len()).max(1);
            stream::iter(self.iter().enumerate())
                .map(move |(index, record)| async move {
                    (index, validate_record(index, record, validators).await)
                })
                .buffered(limit)
                .collect()
                .await
        } else {
            let mut outcomes = Vec::with_capacity(self.len());
            for (index, record) in self.iter().enumerate() {
                outcomes.push((index, validate_record(index, record, validators).await));
            }
            outcomes
        };

        let mut rows = Vec::with_capacity(outcomes.len());
        let mut failures = BTreeMap::new();
        for (index, outcome) in outcomes {
            match outcome {
                Ok(record) => rows.push(record),
                Err(err) => {
                    tracing::warn!("Row {index} failed validation: {err}");
                    failures.insert(index, err);
                }
            }
        }

        tracing::debug!("Validation done: {} passed, {} failed", rows.len(), failures.len());
        ValidationReport {
            table: Table::new(rows, Some(self.headers().to_vec())),
            failures,
        }
    }
}

async fn validate_record(
    index: usize,
    record: &Record,
    validators: &Validators,
) -> Result<Record, ValidationError> {
    let mut output = Record::with_capacity(record.len());

    for (name, value) in record {
        let value = match validators.get(name) {
            Some(validator) => {
                let ctx = FieldContext {
                    row: index,
                    field: name.clone(),
                };
                validator
                    .validate(value.clone(), ctx)
                    .await
                    .map_err(|err| err.in_field(name))?
            }
            None => value.clone(),
        };
        output.insert(name.clone(), value);
    }

    Ok(output)
}
