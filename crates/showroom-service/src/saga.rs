//! Sequential multi-step mutations with compensating rollback.
//!
//! A [`Saga`] runs the steps of a workflow one at a time. Every completed
//! mutating step registers a compensation; when a later step fails, the
//! registered compensations run newest-first and the step's original error
//! is returned to the caller.

use std::future::Future;

use futures::future::BoxFuture;
use tracing::{debug, error, warn};

use showroom_core::error::AppError;
use showroom_core::result::AppResult;

/// A deferred undo action.
type Compensation = BoxFuture<'static, AppResult<()>>;

/// Executor for one run of a multi-step workflow.
pub struct Saga {
    /// Workflow name used in log events.
    name: &'static str,
    /// Registered compensations, oldest first.
    compensations: Vec<(String, Compensation)>,
}

impl std::fmt::Debug for Saga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Saga")
            .field("name", &self.name)
            .field(
                "compensations",
                &self.compensations.iter().map(|(l, _)| l).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Saga {
    /// Start a new saga.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            compensations: Vec::new(),
        }
    }

    /// Number of compensations currently registered.
    pub fn pending(&self) -> usize {
        self.compensations.len()
    }

    /// Register a compensation without running a step.
    ///
    /// Compensations registered first run last, so this is the place for
    /// work that must follow every other undo.
    pub fn on_rollback<F>(&mut self, label: impl Into<String>, compensation: F)
    where
        F: Future<Output = AppResult<()>> + Send + 'static,
    {
        self.compensations.push((label.into(), Box::pin(compensation)));
    }

    /// Run a mutating step. On success, `compensate` builds the undo action
    /// from the step's output; on failure the saga rolls back.
    pub async fn step<T, C, F>(
        &mut self,
        label: impl Into<String>,
        action: impl Future<Output = AppResult<T>>,
        compensate: C,
    ) -> AppResult<T>
    where
        C: FnOnce(&T) -> F,
        F: Future<Output = AppResult<()>> + Send + 'static,
    {
        let label = label.into();
        match action.await {
            Ok(value) => {
                let undo = compensate(&value);
                self.compensations.push((label, Box::pin(undo)));
                Ok(value)
            }
            Err(e) => Err(self.rollback(&label, e).await),
        }
    }

    /// Run a step that needs no undo. A failure still rolls back earlier
    /// steps.
    pub async fn run<T>(
        &mut self,
        label: &str,
        action: impl Future<Output = AppResult<T>>,
    ) -> AppResult<T> {
        match action.await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.rollback(label, e).await),
        }
    }

    /// Fail the saga with `cause` outside of any step.
    pub async fn abort(&mut self, label: &str, cause: AppError) -> AppError {
        self.rollback(label, cause).await
    }

    /// Finish successfully, discarding every compensation. Returns how many
    /// steps were committed.
    pub fn commit(self) -> usize {
        let committed = self.compensations.len();
        debug!(saga = self.name, committed, "Saga committed");
        committed
    }

    async fn rollback(&mut self, failed_step: &str, cause: AppError) -> AppError {
        warn!(
            saga = self.name,
            step = failed_step,
            error = %cause,
            compensations = self.compensations.len(),
            "Saga step failed, rolling back"
        );

        while let Some((label, undo)) = self.compensations.pop() {
            match undo.await {
                Ok(()) => debug!(saga = self.name, compensation = %label, "Compensation applied"),
                Err(e) => error!(
                    saga = self.name,
                    compensation = %label,
                    error = %e,
                    "Compensation failed, residue left in store"
                ),
            }
        }

        cause
    }
}
