//! Backend contract
//!
//! The submission controller treats the backend as an opaque asynchronous
//! operation with exactly one settlement. The simulated implementation waits
//! a fixed delay and decides the outcome deterministically from the captured
//! snapshot; a real network client slots in behind the same trait without
//! touching the state machine.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::context::SessionContext;
use crate::snapshot::{FormSnapshot, SubmissionOutcome};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One remote call per form submission. Implementations must settle exactly
/// once and never hang.
pub trait PortalBackend: Send + Sync {
    /// Identifier for logs (ex: "login.simulated")
    fn id(&self) -> &'static str;

    fn submit<'a>(
        &'a self,
        snapshot: &'a FormSnapshot,
        ctx: &'a SessionContext,
    ) -> BoxFuture<'a, SubmissionOutcome>;
}

/// Fixed-delay backend deciding the outcome from the snapshot alone
pub struct SimulatedBackend {
    id: &'static str,
    delay: Duration,
    decide: Arc<dyn Fn(&FormSnapshot) -> SubmissionOutcome + Send + Sync>,
}

impl SimulatedBackend {
    pub fn new(
        id: &'static str,
        delay: Duration,
        decide: impl Fn(&FormSnapshot) -> SubmissionOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            delay,
            decide: Arc::new(decide),
        }
    }

    /// A backend that succeeds for every payload, like the registration and
    /// password-reset simulations
    pub fn always_succeeding(
        id: &'static str,
        delay: Duration,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self::new(id, delay, move |_| SubmissionOutcome::success(message.clone()))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl PortalBackend for SimulatedBackend {
    fn id(&self) -> &'static str {
        self.id
    }

    fn submit<'a>(
        &'a self,
        snapshot: &'a FormSnapshot,
        _ctx: &'a SessionContext,
    ) -> BoxFuture<'a, SubmissionOutcome> {
        Box::pin(async move {
            tracing::debug!(backend = self.id, delay_ms = self.delay.as_millis() as u64, "simulated call started");
            tokio::time::sleep(self.delay).await;
            let outcome = (self.decide)(snapshot);
            tracing::debug!(backend = self.id, success = outcome.is_success(), "simulated call settled");
            outcome
        })
    }
}
