//! Stage-tagged execution layer for relational-database drivers.
//!
//! This crate runs the staged statement call sequence — prepare, bind
//! arguments, configure fetch behavior, execute, read results or generated
//! keys — against driver handles supplied by the caller. Any failure raised
//! by the driver is caught, tagged with the exact stage it occurred in,
//! enriched with the SQL text and the original cause, and optionally
//! rewritten by a translator fixed at construction time. Every acquired
//! driver resource (prepared statement, open cursor) is released on every
//! exit path, innermost first.
//!
//! Driver access goes through the object-safe contracts in [`driver`]
//! ([`Connection`], [`Statement`], [`Cursor`]); adapters over concrete
//! drivers implement those and nothing else. Connection pooling,
//! transactions, SQL generation, and result caching are out of scope.
//!
//! ```
//! use querykit::{Executor, FetchSize, Value};
//! # use querykit::{Connection, ContextualError};
//!
//! # fn run(conn: &dyn Connection) -> Result<Vec<String>, ContextualError> {
//! let executor = Executor::new();
//! let names = executor.select(
//!     conn,
//!     "SELECT name FROM users WHERE org = ?",
//!     FetchSize::Limited(200),
//!     &[Box::new(|stmt, idx| stmt.set_parameter(idx, Value::from("acme")))],
//!     |row| {
//!         Ok(match row.column(0)? {
//!             Value::Text(name) => name,
//!             other => format!("{other:?}"),
//!         })
//!     },
//! )?;
//! # Ok(names)
//! # }
//! # let _ = run;
//! ```

mod context;
pub mod driver;
pub mod error;
mod executor;
mod guard;
pub mod value;

pub use context::ExecutionContext;
pub use driver::{ArgumentBinder, Connection, Cursor, Statement};
pub use error::{ContextualError, DriverError, DriverResult};
pub use executor::{Executor, FetchSize};
pub use value::Value;
