use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::compare::{Compare, Identity, identity_eq, shallow_eq};
use crate::effects::Dispose;
use crate::reactive::{self, SignalId};

/// Observable value. Reads inside an observer register a dependency; writes
/// notify only when the value actually changed under the signal's [`Compare`].
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    id: SignalId,
    value: RefCell<T>,
    compare: Compare,
    eq: fn(&T, &T) -> bool,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static> Signal<T> {
    fn with_eq(value: T, compare: Compare, eq: fn(&T, &T) -> bool) -> Self {
        Self(Rc::new(Inner {
            id: reactive::next_signal_id(),
            value: RefCell::new(value),
            compare,
            eq,
        }))
    }

    pub fn new(value: T) -> Self
    where
        T: PartialEq,
    {
        Self::with_eq(value, Compare::Shallow, shallow_eq::<T>)
    }

    pub fn identity(value: T) -> Self
    where
        T: Identity,
    {
        Self::with_eq(value, Compare::Identity, identity_eq::<T>)
    }

    pub fn id(&self) -> SignalId {
        self.0.id
    }

    pub fn compare(&self) -> Compare {
        self.0.compare
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        reactive::register_signal_read(self.0.id);
        self.0.value.borrow().clone()
    }

    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    /// Store `v`. Returns whether observers were notified.
    pub fn set(&self, v: T) -> bool {
        let changed = {
            let mut cur = self.0.value.borrow_mut();
            if (self.0.eq)(&cur, &v) {
                false
            } else {
                *cur = v;
                true
            }
        };
        if changed {
            reactive::signal_changed(self.0.id);
        }
        changed
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let mut next = self.get_untracked();
        f(&mut next);
        self.set(next)
    }

    /// Call `f` with every later change of this signal until the returned
    /// guard is run or the enclosing scope is disposed. `f` gets a copy of the
    /// value, so it may write back to this signal.
    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose
    where
        T: Clone,
    {
        let this = self.clone();
        let primed = Cell::new(false);
        let id = reactive::new_observer("signal-watch", move || {
            let v = this.get();
            if primed.replace(true) {
                f(&v)
            }
        });
        reactive::run_observer_now(id);
        let d = Dispose::new(move || reactive::remove_observer(id));
        d.attach_to_current_scope();
        d
    }

    /// Observers currently depending on this signal.
    pub fn subscriber_count(&self) -> usize {
        reactive::subscriber_count(self.0.id)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.0.id)
            .field("value", &*self.0.value.borrow())
            .finish()
    }
}

pub fn signal<T: PartialEq>(t: T) -> Signal<T> {
    Signal::new(t)
}
