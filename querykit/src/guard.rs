//! Scoped release of driver resources.

use super::driver::{Cursor, Statement};
use super::error::DriverResult;

/// A driver resource that must be released when its scope ends.
pub(crate) trait Release {
    /// What the resource is, for the suppressed-failure log line.
    const WHAT: &'static str;

    fn release(&mut self) -> DriverResult<()>;
}

impl Release for Box<dyn Statement> {
    const WHAT: &'static str = "statement";

    fn release(&mut self) -> DriverResult<()> {
        self.close()
    }
}

impl Release for Box<dyn Cursor> {
    const WHAT: &'static str = "cursor";

    fn release(&mut self) -> DriverResult<()> {
        self.close()
    }
}

/// Owns a driver resource and releases it exactly once when dropped,
/// whatever way the scope exits.
///
/// A release failure never masks the primary outcome: it is logged at
/// `warn` level and suppressed. Nested guards release innermost-first
/// (reverse declaration order), so a cursor guard declared after its
/// statement guard closes the cursor before the statement.
pub(crate) struct Guard<R: Release> {
    resource: R,
}

impl<R: Release> Guard<R> {
    pub(crate) const fn new(resource: R) -> Self {
        Self { resource }
    }

    pub(crate) fn get_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}

impl<R: Release> Drop for Guard<R> {
    fn drop(&mut self) {
        if let Err(err) = self.resource.release() {
            log::warn!("suppressed failure closing {}: {err}", R::WHAT);
        }
    }
}
