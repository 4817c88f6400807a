//! The staged execution pipeline.

use std::sync::Arc;

use super::context::ExecutionContext;
use super::driver::{ArgumentBinder, Connection, Cursor, Statement};
use super::error::{ContextualError, DriverError, DriverResult};
use super::guard::Guard;

/// How many rows the driver should fetch per round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchSize {
    /// Leave the driver's default in place. The fetch-size stage is skipped
    /// entirely for this policy.
    #[default]
    DriverDefault,
    /// Hint the driver to fetch at most this many rows per round trip.
    Limited(u32),
}

/// Maps a caught failure to the application error type.
///
/// Called exactly once per failure, at the point of catch. The raw driver
/// error is `None` only for the "no generated key" domain condition.
type Translator<E> =
    Arc<dyn Fn(ExecutionContext, &str, Option<DriverError>) -> E + Send + Sync>;

/// Runs SQL statements through the staged call sequence, tagging every
/// failure with its execution stage and releasing every acquired driver
/// resource on every exit path.
///
/// The error type `E` is fixed by the translator supplied at construction;
/// [`Executor::new`] uses the identity translation into [`ContextualError`].
/// An executor holds no mutable state and can be shared freely.
pub struct Executor<E = ContextualError> {
    translator: Translator<E>,
}

impl Executor<ContextualError> {
    /// Creates an executor with the identity translation: every failure
    /// surfaces as a [`ContextualError`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_translator(|context, sql, cause| match cause {
            Some(cause) => ContextualError::new(context, sql, cause),
            None => ContextualError::no_generated_key(sql),
        })
    }
}

impl Default for Executor<ContextualError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Executor<E> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
        }
    }
}

impl<E> Executor<E> {
    /// Creates an executor whose failures are produced by `translator`.
    ///
    /// The translator fully replaces the surfaced error: the pipeline does
    /// not re-wrap its output. It must be pure; it is shared across clones
    /// and may be invoked from any number of concurrent invocations.
    pub fn with_translator<F>(translator: F) -> Self
    where
        F: Fn(ExecutionContext, &str, Option<DriverError>) -> E + Send + Sync + 'static,
    {
        Self {
            translator: Arc::new(translator),
        }
    }

    /// Executes a query and collects one value per row, in cursor order.
    ///
    /// Stages: prepare, bind arguments, apply the fetch size (only for
    /// [`FetchSize::Limited`]), execute, then advance the cursor and apply
    /// `read_row` to each row. Cursor and statement are closed on every
    /// exit path, cursor first.
    ///
    /// # Errors
    ///
    /// Returns the translated error for the first stage that fails.
    pub fn select<T, F>(
        &self,
        conn: &dyn Connection,
        sql: &str,
        fetch_size: FetchSize,
        binders: &[ArgumentBinder<'_>],
        mut read_row: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(&mut dyn Cursor) -> DriverResult<T>,
    {
        let stmt = conn
            .prepare(sql, false)
            .map_err(|e| self.fail(prepare_context(false), sql, e))?;
        let mut stmt = Guard::new(stmt);
        self.bind_arguments(stmt.get_mut().as_mut(), sql, binders)?;
        if let FetchSize::Limited(size) = fetch_size {
            stmt.get_mut()
                .set_fetch_size(size)
                .map_err(|e| self.fail(ExecutionContext::SetFetchSize(size), sql, e))?;
        }
        let cursor = stmt
            .get_mut()
            .execute_query()
            .map_err(|e| self.fail(ExecutionContext::ExecuteQuery, sql, e))?;
        let mut cursor = Guard::new(cursor);
        let mut rows = Vec::new();
        while cursor
            .get_mut()
            .advance()
            .map_err(|e| self.fail(ExecutionContext::ReadResultSet, sql, e))?
        {
            let row = read_row(cursor.get_mut().as_mut())
                .map_err(|e| self.fail(ExecutionContext::ReadResultSet, sql, e))?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Executes an update and returns the affected-row count.
    ///
    /// Stages: prepare, bind arguments, execute. The statement is closed on
    /// every exit path.
    ///
    /// # Errors
    ///
    /// Returns the translated error for the first stage that fails.
    pub fn update(
        &self,
        conn: &dyn Connection,
        sql: &str,
        binders: &[ArgumentBinder<'_>],
    ) -> Result<u64, E> {
        let stmt = conn
            .prepare(sql, false)
            .map_err(|e| self.fail(prepare_context(false), sql, e))?;
        let mut stmt = Guard::new(stmt);
        self.bind_arguments(stmt.get_mut().as_mut(), sql, binders)?;
        stmt.get_mut()
            .execute_update()
            .map_err(|e| self.fail(ExecutionContext::ExecuteUpdate, sql, e))
    }

    /// Executes an update that generates a key and reads that key back.
    ///
    /// Stages: prepare in generated-keys mode, bind arguments, execute,
    /// obtain the keys cursor, advance it once, apply `read_key` to the
    /// first row only. A keys cursor with no row surfaces the "no generated
    /// key" condition through the translator with an absent cause. Cursor
    /// and statement are closed on every exit path, cursor first.
    ///
    /// # Errors
    ///
    /// Returns the translated error for the first stage that fails, or the
    /// translated no-key condition when the statement generated nothing.
    pub fn update_returning_key<T, F>(
        &self,
        conn: &dyn Connection,
        sql: &str,
        binders: &[ArgumentBinder<'_>],
        read_key: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&mut dyn Cursor) -> DriverResult<T>,
    {
        let stmt = conn
            .prepare(sql, true)
            .map_err(|e| self.fail(prepare_context(true), sql, e))?;
        let mut stmt = Guard::new(stmt);
        self.bind_arguments(stmt.get_mut().as_mut(), sql, binders)?;
        stmt.get_mut()
            .execute_update()
            .map_err(|e| self.fail(ExecutionContext::ExecuteUpdate, sql, e))?;
        let keys = stmt
            .get_mut()
            .generated_keys()
            .map_err(|e| self.fail(ExecutionContext::GetGeneratedKeys, sql, e))?;
        let mut keys = Guard::new(keys);
        let has_row = keys
            .get_mut()
            .advance()
            .map_err(|e| self.fail(ExecutionContext::ReadGeneratedKeys, sql, e))?;
        if !has_row {
            return Err((self.translator)(
                ExecutionContext::GetGeneratedKeys,
                sql,
                None,
            ));
        }
        read_key(keys.get_mut().as_mut())
            .map_err(|e| self.fail(ExecutionContext::ReadGeneratedKeys, sql, e))
    }

    /// Invokes each binder in supply order with its 1-based position.
    fn bind_arguments(
        &self,
        stmt: &mut dyn Statement,
        sql: &str,
        binders: &[ArgumentBinder<'_>],
    ) -> Result<(), E> {
        for (i, bind) in binders.iter().enumerate() {
            bind(stmt, i + 1)
                .map_err(|e| self.fail(ExecutionContext::SetArguments, sql, e))?;
        }
        Ok(())
    }

    fn fail(&self, context: ExecutionContext, sql: &str, cause: DriverError) -> E {
        (self.translator)(context, sql, Some(cause))
    }
}

const fn prepare_context(returns_generated_keys: bool) -> ExecutionContext {
    ExecutionContext::PrepareStatement {
        returns_generated_keys,
    }
}
