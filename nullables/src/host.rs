//! Nullable host object with scripted init-data availability.

use miniapp_acquirer::{HostObject, HostReadError};
use std::cell::Cell;
use std::time::Duration;
use tokio::time::Instant;

/// A host object whose init-data field appears on a script.
///
/// Every read is counted so tests can assert which sources were consulted.
pub struct NullHost {
    value: Option<String>,
    /// Reads before the value becomes visible.
    hidden_reads: usize,
    /// Whether hidden reads fail instead of returning nothing.
    fail_while_hidden: bool,
    /// Earliest instant the value becomes visible.
    visible_at: Option<Instant>,
    reads: Cell<usize>,
}

impl NullHost {
    fn with(value: Option<String>) -> Self {
        Self {
            value,
            hidden_reads: 0,
            fail_while_hidden: false,
            visible_at: None,
            reads: Cell::new(0),
        }
    }

    /// No host object is ever attached.
    pub fn absent() -> Self {
        Self::with(None)
    }

    /// The field is set before the first read.
    pub fn present(value: impl Into<String>) -> Self {
        Self::with(Some(value.into()))
    }

    /// The first `reads` reads see nothing.
    pub fn after_reads(reads: usize, value: impl Into<String>) -> Self {
        Self {
            hidden_reads: reads,
            ..Self::with(Some(value.into()))
        }
    }

    /// The first `reads` reads fail, as a partially initialised host would.
    pub fn failing_for(reads: usize, value: impl Into<String>) -> Self {
        Self {
            hidden_reads: reads,
            fail_while_hidden: true,
            ..Self::with(Some(value.into()))
        }
    }

    /// The value becomes visible `delay` after construction, on tokio's clock.
    pub fn available_after(delay: Duration, value: impl Into<String>) -> Self {
        Self {
            visible_at: Some(Instant::now() + delay),
            ..Self::with(Some(value.into()))
        }
    }

    /// Number of reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl HostObject for NullHost {
    fn read_init_data(&self) -> Result<Option<String>, HostReadError> {
        let read = self.reads.get();
        self.reads.set(read + 1);

        let hidden = read < self.hidden_reads
            || self.visible_at.is_some_and(|at| Instant::now() < at);
        if hidden {
            if self.fail_while_hidden {
                return Err(HostReadError::NotReady("initData accessor threw".into()));
            }
            return Ok(None);
        }
        Ok(self.value.clone())
    }
}
