//! Accessor for the host integration object.

use crate::HostReadError;

/// Read-only view of the init-data field the Telegram client attaches to the
/// page. The acquirer depends on it but does not own it, so tests substitute
/// their own implementation.
pub trait HostObject {
    /// Current value of the init-data field.
    ///
    /// `Ok(None)` when the host (or the field) is not attached yet; `Err` when
    /// reading it failed, e.g. because the host is partially initialised.
    fn read_init_data(&self) -> Result<Option<String>, HostReadError>;
}

/// Any `Fn() -> Option<String>` is an infallible host accessor.
impl<F> HostObject for F
where
    F: Fn() -> Option<String>,
{
    fn read_init_data(&self) -> Result<Option<String>, HostReadError> {
        Ok(self())
    }
}

/// The page was opened outside the Telegram client: there is no host object.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHost;

impl HostObject for NoHost {
    fn read_init_data(&self) -> Result<Option<String>, HostReadError> {
        Ok(None)
    }
}
