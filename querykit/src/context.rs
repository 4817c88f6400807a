//! Execution stage tags for the staged statement pipeline.

use std::fmt;

/// The stage of the execution pipeline active when a failure occurred.
///
/// Each invocation of the pipeline walks through a fixed sequence of driver
/// calls; every raw failure is caught and tagged with the variant describing
/// the call in progress. The variants carry only the data needed to render
/// a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Preparing the statement for the SQL text.
    PrepareStatement {
        /// Whether the statement was prepared in generated-keys mode.
        returns_generated_keys: bool,
    },
    /// Invoking the caller-supplied argument binders.
    SetArguments,
    /// Applying a limited fetch size to the statement.
    SetFetchSize(u32),
    /// Executing the query and obtaining a cursor.
    ExecuteQuery,
    /// Executing the update and obtaining an affected-row count.
    ExecuteUpdate,
    /// Obtaining the cursor over the generated keys.
    GetGeneratedKeys,
    /// Advancing the result cursor or reading a column from it.
    ReadResultSet,
    /// Reading the generated key from the first row of the keys cursor.
    ReadGeneratedKeys,
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrepareStatement { .. } => write!(f, "preparing the statement"),
            Self::SetArguments => write!(f, "setting the arguments"),
            Self::SetFetchSize(size) => {
                write!(f, "setting the fetch size to {size}")
            }
            Self::ExecuteQuery => write!(f, "executing the query"),
            Self::ExecuteUpdate => write!(f, "executing the update"),
            Self::GetGeneratedKeys => {
                write!(f, "getting the ResultSet of the generated key")
            }
            Self::ReadResultSet => write!(f, "reading the ResultSet"),
            Self::ReadGeneratedKeys => write!(f, "reading the generated key"),
        }
    }
}
