use std::any::Any;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use crate::compare::Compare;
use crate::effects::Dispose;
use crate::error::MirrorError;
use crate::slot::{AnySlot, Slot, SlotState};

/// A store of typed slots with a closed key set. Implemented by
/// [`mirror_store!`](crate::mirror_store).
pub trait Store: 'static {
    type Key: Copy + Eq + Hash + Debug + Display + FromStr<Err = MirrorError> + 'static;

    fn keys() -> &'static [Self::Key];
    fn slot(&self, key: Self::Key) -> &dyn AnySlot;
}

/// Snapshot of one slot, for logging and inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotInfo {
    pub key: &'static str,
    pub state: SlotState,
    pub compare: Compare,
    pub type_name: &'static str,
    pub subscribers: usize,
}

/// The write side of a store. Held by layered wrappers only.
pub struct MirrorRegistry<S: Store> {
    store: Rc<S>,
}

impl<S: Store> Clone for MirrorRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> MirrorRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Last writer wins. Subscribers of this key are notified only if the
    /// value changed under the key's comparison, so calling this on every
    /// render is fine.
    pub fn register<T: 'static>(&self, slot: impl FnOnce(&S) -> &Slot<T>, value: T) -> bool {
        slot(&*self.store).register(value)
    }

    /// Dynamic registration by key name. Fails on unknown keys and on values
    /// of the wrong type.
    pub fn register_dyn(&self, key: &str, value: Box<dyn Any>) -> Result<bool, MirrorError> {
        let key: S::Key = key.parse()?;
        self.store.slot(key).register_any(value)
    }

    /// Untracked read of the current value.
    pub fn peek<T: Clone + 'static>(&self, slot: impl FnOnce(&S) -> &Slot<T>) -> T {
        slot(&*self.store).peek()
    }

    /// The read-only half, for handing to presentational components.
    pub fn mirror(&self) -> Mirror<S> {
        Mirror {
            store: self.store.clone(),
        }
    }

    /// Weak handle for actions stored inside the registry itself.
    pub fn downgrade(&self) -> WeakRegistry<S> {
        WeakRegistry {
            store: Rc::downgrade(&self.store),
        }
    }

    /// Register several keys; subscribers see all of them in one update.
    pub fn batch<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        crate::reactive::batch(|| f(self))
    }

    pub fn slot_state(&self, key: S::Key) -> SlotState {
        self.store.slot(key).state()
    }

    pub fn snapshot(&self) -> Vec<SlotInfo> {
        snapshot(&*self.store)
    }
}

pub struct WeakRegistry<S: Store> {
    store: Weak<S>,
}

impl<S: Store> Clone for WeakRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> WeakRegistry<S> {
    pub fn upgrade(&self) -> Option<MirrorRegistry<S>> {
        self.store.upgrade().map(|store| MirrorRegistry { store })
    }
}

/// The read side of a store. Presentational components get only this, so
/// they can subscribe but never register.
pub struct Mirror<S: Store> {
    store: Rc<S>,
}

impl<S: Store> Clone for Mirror<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> Mirror<S> {
    /// Read a key and, inside a mounted component, re-run that component
    /// whenever this key (and only this key) changes.
    pub fn subscribe<T: Clone + 'static>(&self, slot: impl FnOnce(&S) -> &Slot<T>) -> T {
        slot(&*self.store).subscribe()
    }

    /// Untracked read; never creates a dependency.
    pub fn peek<T: Clone + 'static>(&self, slot: impl FnOnce(&S) -> &Slot<T>) -> T {
        slot(&*self.store).peek()
    }

    /// Deliver every later change of one key to `f`. `f` may register the
    /// same key again; the write is delivered after it returns.
    pub fn watch<T: Clone + 'static>(
        &self,
        slot: impl FnOnce(&S) -> &Slot<T>,
        f: impl Fn(&T) + 'static,
    ) -> Dispose {
        slot(&*self.store).watch(f)
    }

    pub fn slot_state(&self, key: S::Key) -> SlotState {
        self.store.slot(key).state()
    }

    pub fn snapshot(&self) -> Vec<SlotInfo> {
        snapshot(&*self.store)
    }
}

fn snapshot<S: Store>(store: &S) -> Vec<SlotInfo> {
    S::keys()
        .iter()
        .map(|&key| {
            let slot = store.slot(key);
            SlotInfo {
                key: slot.key(),
                state: slot.state(),
                compare: slot.compare(),
                type_name: slot.type_name(),
                subscribers: slot.subscriber_count(),
            }
        })
        .collect()
}
