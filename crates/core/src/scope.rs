//! Scoped ownership of a lifecycle-managed component.

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

use crate::lifecycle::Lifecycle;

/// Guard that owns a component for one unit of work.
///
/// `destroy` runs exactly once: either when the guard is dropped (including
/// during unwinding) or when [`Scoped::close`] is called.
#[derive(Debug)]
pub struct Scoped<T: Lifecycle> {
    inner: T,
}

impl<T: Lifecycle> Scoped<T> {
    /// Takes ownership of an already initialized component.
    pub fn new(component: T) -> Self {
        Self { inner: component }
    }

    /// Ends the scope early and hands back the destroyed component.
    pub fn close(self) -> T {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `inner` is moved out exactly once
        // and the guard's `Drop` does not run for it.
        let mut component = unsafe { core::ptr::read(&this.inner) };
        component.destroy();
        component
    }
}

impl<T: Lifecycle> Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Lifecycle> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Lifecycle> Drop for Scoped<T> {
    fn drop(&mut self) {
        tracing::debug!("scope ended; releasing component");
        self.inner.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainResult;
    use crate::lifecycle::LifecycleState;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted {
        destroyed: Rc<Cell<u32>>,
        state: LifecycleState,
    }

    impl Counted {
        fn new(counter: &Rc<Cell<u32>>) -> Self {
            Self {
                destroyed: Rc::clone(counter),
                state: LifecycleState::Wired,
            }
        }
    }

    impl Lifecycle for Counted {
        fn init(&mut self) -> DomainResult<()> {
            self.state = LifecycleState::Initialized;
            Ok(())
        }

        fn destroy(&mut self) {
            self.destroyed.set(self.destroyed.get() + 1);
            self.state = LifecycleState::Destroyed;
        }

        fn state(&self) -> LifecycleState {
            self.state
        }
    }

    #[test]
    fn drop_destroys_exactly_once() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut counted = Counted::new(&counter);
            counted.init().unwrap();
            let scoped = Scoped::new(counted);
            assert_eq!(scoped.state(), LifecycleState::Initialized);
            assert_eq!(counter.get(), 0);
        }
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn close_destroys_once_and_returns_component() {
        let counter = Rc::new(Cell::new(0));
        let scoped = Scoped::new(Counted::new(&counter));

        let counted = scoped.close();
        assert_eq!(counted.state(), LifecycleState::Destroyed);
        assert_eq!(counter.get(), 1);

        drop(counted);
        assert_eq!(counter.get(), 1);
    }

    struct DropCounting {
        counted: Counted,
        dropped: Rc<Cell<u32>>,
    }

    impl Drop for DropCounting {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    impl Lifecycle for DropCounting {
        fn init(&mut self) -> DomainResult<()> {
            self.counted.init()
        }

        fn destroy(&mut self) {
            self.counted.destroy();
        }

        fn state(&self) -> LifecycleState {
            self.counted.state()
        }
    }

    #[test]
    fn close_moves_component_out_without_extra_drop() {
        let destroyed = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(0));
        let scoped = Scoped::new(DropCounting {
            counted: Counted::new(&destroyed),
            dropped: Rc::clone(&dropped),
        });

        let component = scoped.close();
        assert_eq!(dropped.get(), 0);
        assert_eq!(component.state(), LifecycleState::Destroyed);

        drop(component);
        assert_eq!(dropped.get(), 1);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn unwinding_still_destroys() {
        let counter = Rc::new(Cell::new(0));
        let inner = Rc::clone(&counter);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _scoped = Scoped::new(Counted::new(&inner));
            if inner.get() == 0 {
                panic!("unit of work failed");
            }
        }));

        assert!(result.is_err());
        assert_eq!(counter.get(), 1);
    }
}
