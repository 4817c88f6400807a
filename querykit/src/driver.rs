//! Collaborator contracts implemented by driver adapters.
//!
//! The execution layer never talks to a database directly; it drives these
//! object-safe traits and leaves their implementation to an adapter over a
//! concrete driver. Handles are owned (`Box<dyn …>`): an adapter that needs
//! to tie a cursor back to its statement can share state internally.

use super::error::DriverResult;
use super::value::Value;

/// An open database connection.
///
/// The connection is borrowed by the execution layer for the duration of a
/// single invocation and is never pooled, synchronized, or closed by it.
pub trait Connection {
    /// Prepares a statement for the given SQL text.
    ///
    /// When `returns_generated_keys` is set, the statement must be prepared
    /// so that [`Statement::generated_keys`] can be called after an update.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver rejects the statement.
    fn prepare(
        &self,
        sql: &str,
        returns_generated_keys: bool,
    ) -> DriverResult<Box<dyn Statement>>;
}

/// A prepared statement handle.
pub trait Statement {
    /// Binds a value to the parameter at `index` (1-based).
    ///
    /// # Errors
    ///
    /// Returns an error if the driver rejects the bind.
    fn set_parameter(&mut self, index: usize, value: Value) -> DriverResult<()>;

    /// Applies a fetch-size hint to the statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver rejects the hint.
    fn set_fetch_size(&mut self, size: u32) -> DriverResult<()>;

    /// Executes the statement as a query, producing a cursor over the rows.
    ///
    /// # Errors
    ///
    /// Returns an error if execution fails.
    fn execute_query(&mut self) -> DriverResult<Box<dyn Cursor>>;

    /// Executes the statement as an update, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if execution fails.
    fn execute_update(&mut self) -> DriverResult<u64>;

    /// Returns a cursor over the keys generated by the last update.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot produce the keys cursor.
    fn generated_keys(&mut self) -> DriverResult<Box<dyn Cursor>>;

    /// Closes the statement, releasing its driver resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to close the statement.
    fn close(&mut self) -> DriverResult<()>;
}

/// An iterator-like handle over query results.
pub trait Cursor {
    /// Advances to the next row. Returns `false` once the rows are exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to advance.
    fn advance(&mut self) -> DriverResult<bool>;

    /// Reads the column at `index` (0-based) from the current row.
    ///
    /// # Errors
    ///
    /// Returns an error if the column cannot be read.
    fn column(&self, index: usize) -> DriverResult<Value>;

    /// Closes the cursor, releasing its driver resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to close the cursor.
    fn close(&mut self) -> DriverResult<()>;
}

/// A caller-supplied capability that binds one argument to a statement.
///
/// The execution layer owns the invocation order: binders are called in the
/// order they are supplied, each with the 1-based position it should bind.
pub type ArgumentBinder<'a> =
    Box<dyn Fn(&mut dyn Statement, usize) -> DriverResult<()> + 'a>;
