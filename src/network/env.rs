//! The socket subsystem must be started before any request is issued and
//! stopped after the last one. [`Environment`] is the proof that it is up:
//! clients borrow one, so a request cannot outlive it.
//!
//! Like the native subsystems it stands for, start/stop pairs are counted.
//! The first start initialises, the last stop tears down, and any number of
//! requests on any thread may share one started environment.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::network::error::Error;

static STARTED: AtomicUsize = AtomicUsize::new(0);

/// A started socket subsystem.
#[derive(Debug)]
pub struct Environment {
    _private: (),
}

impl Environment {
    /// Starts the socket subsystem.
    pub fn start() -> Result<Self, Error> {
        let previous = STARTED.fetch_add(1, Ordering::AcqRel);
        if previous == usize::MAX {
            STARTED.fetch_sub(1, Ordering::AcqRel);
            return Err(Error::TooManyConns);
        }
        if previous == 0 {
            tracing::debug!("socket subsystem started");
        }
        Ok(Self { _private: () })
    }

    /// Stops the socket subsystem.
    ///
    /// Dropping the environment has the same effect; this form exists so the
    /// teardown point is visible at the call site.
    pub fn stop(self) -> Result<(), Error> {
        drop(self);
        Ok(())
    }

    /// Returns whether at least one environment is currently started.
    pub fn is_live() -> bool {
        STARTED.load(Ordering::Acquire) > 0
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        if STARTED.fetch_sub(1, Ordering::AcqRel) == 1 {
            tracing::debug!("socket subsystem stopped");
        }
    }
}
