//! Error types for the staged execution layer.

use std::fmt;

use thiserror::Error;

use super::context::ExecutionContext;

/// Result type for driver-facing operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// An opaque failure surfaced by a driver implementation.
///
/// Trait-object boundaries erase the concrete error type, so the type name
/// is captured at construction instead: [`DriverError::from_error`] records
/// `std::any::type_name` of the wrapped error, [`DriverError::new`] takes a
/// caller-chosen name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: {message}")]
pub struct DriverError {
    /// Name of the underlying error type, used in diagnostics.
    pub type_name: String,
    /// Human-readable failure message.
    pub message: String,
}

impl DriverError {
    /// Creates a driver error from a type name and a message.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates a driver error from any concrete error value, capturing its
    /// type name and display message.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self {
            type_name: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
        }
    }
}

/// A driver failure tagged with the execution stage it occurred in and the
/// SQL text being executed.
///
/// `cause` is `None` exactly for the "no generated key" domain condition
/// (see [`ContextualError::no_generated_key`]); every other instance wraps
/// the original driver failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualError {
    /// The stage active when the failure occurred.
    pub context: ExecutionContext,
    /// The SQL text being executed.
    pub sql: String,
    /// The original driver failure, absent only for the "no generated key"
    /// condition.
    pub cause: Option<DriverError>,
}

impl ContextualError {
    /// Wraps a driver failure with its execution stage and SQL text.
    pub fn new(
        context: ExecutionContext,
        sql: impl Into<String>,
        cause: DriverError,
    ) -> Self {
        Self {
            context,
            sql: sql.into(),
            cause: Some(cause),
        }
    }

    /// Builds the domain error for a generated-keys statement that produced
    /// no key.
    pub fn no_generated_key(sql: impl Into<String>) -> Self {
        Self {
            context: ExecutionContext::GetGeneratedKeys,
            sql: sql.into(),
            cause: None,
        }
    }

    /// Returns `true` if this is the "no generated key" domain condition.
    #[must_use]
    pub const fn is_no_generated_key(&self) -> bool {
        self.cause.is_none()
    }
}

impl fmt::Display for ContextualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error when {}", self.context)?;
        write!(f, "\n  SQL: \"{}\"", self.sql)?;
        match &self.cause {
            Some(cause) => {
                write!(
                    f,
                    "\n  Cause: An error of type {} was raised",
                    cause.type_name
                )?;
                write!(f, "\n  Cause message: {}", cause.message)
            }
            None => write!(
                f,
                "\n  No key was generated by the execution of the statement"
            ),
        }
    }
}

impl std::error::Error for ContextualError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
