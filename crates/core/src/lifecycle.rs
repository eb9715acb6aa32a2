//! Component lifecycle hooks.

use crate::error::DomainResult;

/// Observable lifecycle state of a managed component.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, dependencies not (fully) assigned yet.
    Uninitialized,
    /// Every dependency assigned; `init` has not run.
    Wired,
    /// `init` has run at least once.
    Initialized,
    /// `destroy` has run. Terminal.
    Destroyed,
}

/// Post-construction and pre-destruction hooks.
///
/// Whoever constructs a component is responsible for calling `init` once
/// after wiring it and `destroy` once before dropping it. [`crate::Scoped`]
/// takes care of the second half.
pub trait Lifecycle {
    /// Runs after every dependency has been assigned.
    ///
    /// Implementations are not required to be idempotent.
    fn init(&mut self) -> DomainResult<()>;

    /// Runs once at teardown. Must not fail.
    fn destroy(&mut self);

    fn state(&self) -> LifecycleState;
}
