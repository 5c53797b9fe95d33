//! Lightbulb service shared between execution contexts
//!
//! Wraps the service in a `critical-section` mutex. Each call runs in a
//! single critical section, so a write batch is applied without another
//! context observing or changing the state halfway.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::StripOutput;
use crate::accessory::{LightbulbService, WriteRequest};
use crate::error::WriteError;

/// Thread/interrupt safe lightbulb service
///
/// Can be placed in a `static` once the service is constructed with
/// const-compatible values, or created at startup and shared by reference.
pub struct SharedLightbulb<O: StripOutput> {
    inner: Mutex<RefCell<LightbulbService<O>>>,
}

impl<O: StripOutput> SharedLightbulb<O> {
    pub const fn new(service: LightbulbService<O>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(service)),
        }
    }

    /// Apply a batch of writes atomically
    pub fn handle_writes(&self, requests: &mut [WriteRequest<'_>]) -> Result<(), WriteError> {
        self.with(|service| service.handle_writes(requests))
    }

    /// Run a closure with exclusive access to the service
    pub fn with<R>(&self, f: impl FnOnce(&mut LightbulbService<O>) -> R) -> R {
        critical_section::with(|cs| {
            let mut service = self.inner.borrow(cs).borrow_mut();
            f(&mut service)
        })
    }

    /// Release the service
    pub fn into_inner(self) -> LightbulbService<O> {
        self.inner.into_inner().into_inner()
    }
}
