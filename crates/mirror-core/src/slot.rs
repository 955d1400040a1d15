use std::any::Any;
use std::cell::Cell;

use crate::compare::{Compare, Identity};
use crate::effects::Dispose;
use crate::error::MirrorError;
use crate::signal::Signal;

/// Per-key lifecycle. There is no way back to `Unset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Still holding the slice default.
    Unset,
    /// Holding the last registered value.
    Set,
}

/// One typed key of a mirror store.
///
/// Only [`MirrorRegistry`](crate::MirrorRegistry) can write a slot; everything
/// else reads it through [`Mirror`](crate::Mirror).
pub struct Slot<T: 'static> {
    key: &'static str,
    signal: Signal<T>,
    state: Cell<SlotState>,
}

impl<T: 'static> Slot<T> {
    pub fn shallow(key: &'static str, default: T) -> Self
    where
        T: PartialEq,
    {
        Self::from_signal(key, Signal::new(default))
    }

    pub fn identity(key: &'static str, default: T) -> Self
    where
        T: Identity,
    {
        Self::from_signal(key, Signal::identity(default))
    }

    fn from_signal(key: &'static str, signal: Signal<T>) -> Self {
        Self {
            key,
            signal,
            state: Cell::new(SlotState::Unset),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn state(&self) -> SlotState {
        self.state.get()
    }

    pub fn compare(&self) -> Compare {
        self.signal.compare()
    }

    pub fn subscriber_count(&self) -> usize {
        self.signal.subscriber_count()
    }

    pub(crate) fn register(&self, value: T) -> bool {
        if self.state.replace(SlotState::Set) == SlotState::Unset {
            log::debug!("mirror: first registration of `{}`", self.key);
        }
        let changed = self.signal.set(value);
        log::trace!("mirror: register `{}` (changed: {changed})", self.key);
        changed
    }

    pub(crate) fn subscribe(&self) -> T
    where
        T: Clone,
    {
        self.signal.get()
    }

    pub(crate) fn peek(&self) -> T
    where
        T: Clone,
    {
        self.signal.get_untracked()
    }

    pub(crate) fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose
    where
        T: Clone,
    {
        self.signal.watch(f)
    }
}

/// Type-erased view of a slot, used for dynamic keys and inspection.
pub trait AnySlot {
    fn key(&self) -> &'static str;
    fn state(&self) -> SlotState;
    fn compare(&self) -> Compare;
    fn type_name(&self) -> &'static str;
    fn subscriber_count(&self) -> usize;
    /// Register a boxed value, failing if it is not this slot's type.
    fn register_any(&self, value: Box<dyn Any>) -> Result<bool, MirrorError>;
}

impl<T: 'static> AnySlot for Slot<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn state(&self) -> SlotState {
        self.state.get()
    }

    fn compare(&self) -> Compare {
        self.signal.compare()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn subscriber_count(&self) -> usize {
        self.signal.subscriber_count()
    }

    fn register_any(&self, value: Box<dyn Any>) -> Result<bool, MirrorError> {
        let value = value.downcast::<T>().map_err(|_| MirrorError::TypeMismatch {
            key: self.key,
            expected: std::any::type_name::<T>(),
        })?;
        Ok(self.register(*value))
    }
}
