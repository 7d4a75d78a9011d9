//! The lazy registry: owns deferred checks, runs them, aggregates failures.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem;

use fluent_types::{AggregateFailure, CheckError, CheckFailure, EvaluatorFault, FluentSettings, MessageStyle};
use thiserror::Error;

use crate::handle::LazyCheck;

/// One registered check, not yet evaluated.
pub(crate) type DeferredUnit<'v> = Box<dyn Fn(&MessageStyle) -> Result<(), CheckError> + 'v>;

/// Lifecycle of a [`LazyChecks`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Nothing registered and never run.
    Empty,
    /// Checks were registered since creation or since the last run.
    Accumulating,
    /// [`LazyChecks::run_all`] went through; running again re-runs every check.
    Executed,
}

#[derive(Debug, Error)]
pub enum LazyCheckError {
    /// One or more checks failed. The only assertion outcome a caller sees.
    #[error(transparent)]
    Failed(#[from] AggregateFailure),
    /// A check could not be evaluated. The run stopped at `position`.
    #[error("lazy check at position {position} could not be evaluated: {fault}")]
    Fault {
        position: usize,
        #[source]
        fault: EvaluatorFault,
    },
}

impl LazyCheckError {
    #[must_use]
    pub fn aggregate(&self) -> Option<&AggregateFailure> {
        match self {
            LazyCheckError::Failed(aggregate) => Some(aggregate),
            LazyCheckError::Fault { .. } => None,
        }
    }
}

/// Registers fluent checks now and evaluates all of them later, in one pass.
///
/// One registry per test scenario: create it, call [`that`](Self::that) for
/// every subject, chain predicates on the returned handles, then call
/// [`run_all`](Self::run_all) once. Every failing check is reported, not
/// only the first.
///
/// Single-threaded by construction: handles share the registry through a
/// plain reference and the registry is not `Sync`.
///
/// # Invariants
///
/// - Checks run in registration order.
/// - Each predicate call on a handle adds exactly one check; `that` and
///   `not` add none.
pub struct LazyChecks<'v> {
    units: RefCell<Vec<DeferredUnit<'v>>>,
    state: Cell<RegistryState>,
    settings: FluentSettings,
}

impl<'v> LazyChecks<'v> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(FluentSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: FluentSettings) -> Self {
        Self {
            units: RefCell::new(Vec::new()),
            state: Cell::new(RegistryState::Empty),
            settings,
        }
    }

    /// Registry using the settings from the user's fluent config file.
    #[must_use]
    pub fn from_config() -> Self {
        Self::with_settings(fluent_config::load())
    }

    /// Start a fluent chain on `value`. Registers nothing by itself.
    pub fn that<T>(&self, value: T) -> LazyCheck<'_, 'v, T> {
        LazyCheck::new(self, value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.borrow().is_empty()
    }

    #[must_use]
    pub fn state(&self) -> RegistryState {
        self.state.get()
    }

    #[must_use]
    pub fn settings(&self) -> &FluentSettings {
        &self.settings
    }

    pub(crate) fn push(&self, unit: DeferredUnit<'v>) {
        let mut units = self.units.borrow_mut();
        units.push(unit);
        self.state.set(RegistryState::Accumulating);
        tracing::debug!(position = units.len() - 1, "Registered lazy check");
    }

    /// Evaluate every registered check in registration order.
    ///
    /// Failing checks do not stop the run; they are collected into one
    /// [`AggregateFailure`]. An [`EvaluatorFault`] does stop it: the checks
    /// after the faulty one are not evaluated.
    ///
    /// The registry is not cleared, not even when a check panics. Calling
    /// this again evaluates every check again and reports any failure again.
    pub fn run_all(&self) -> Result<(), LazyCheckError> {
        let running = RunningUnits {
            registry: self,
            units: self.units.take(),
        };
        self.state.set(RegistryState::Executed);

        let outcome = run_units(&running.units, self.settings.message_style());
        drop(running);

        let failures = outcome?;
        match AggregateFailure::new(failures) {
            Some(aggregate) => Err(aggregate.into()),
            None => Ok(()),
        }
    }
}

/// Units taken out of a registry for the duration of a run.
///
/// Dropping puts them back, unwinding included. Checks registered while the
/// run was in progress go after the existing ones.
struct RunningUnits<'r, 'v> {
    registry: &'r LazyChecks<'v>,
    units: Vec<DeferredUnit<'v>>,
}

impl Drop for RunningUnits<'_, '_> {
    fn drop(&mut self) {
        let mut slot = self.registry.units.borrow_mut();
        let added = mem::replace(&mut *slot, mem::take(&mut self.units));
        if !added.is_empty() {
            slot.extend(added);
            self.registry.state.set(RegistryState::Accumulating);
        }
    }
}

fn run_units(
    units: &[DeferredUnit<'_>],
    style: &MessageStyle,
) -> Result<Vec<CheckFailure>, LazyCheckError> {
    let total = units.len();
    let mut failures = Vec::new();

    for (position, unit) in units.iter().enumerate() {
        match unit(style) {
            Ok(()) => tracing::trace!(position, "Lazy check passed"),
            Err(CheckError::Failed(failure)) => {
                tracing::debug!(position, "Lazy check failed");
                failures.push(failure);
            }
            Err(CheckError::Unexpected(fault)) => {
                tracing::warn!(
                    position,
                    total,
                    "Lazy check could not be evaluated, aborting run: {fault}"
                );
                return Err(LazyCheckError::Fault { position, fault });
            }
        }
    }

    tracing::info!(total, failed = failures.len(), "Executed lazy checks");
    Ok(failures)
}

impl Default for LazyChecks<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LazyChecks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyChecks")
            .field("registered", &self.len())
            .field("state", &self.state.get())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Drop for LazyChecks<'_> {
    fn drop(&mut self) {
        if self.state.get() == RegistryState::Accumulating {
            tracing::warn!(
                registered = self.units.get_mut().len(),
                "Lazy checks dropped without running the latest registrations"
            );
        }
    }
}
