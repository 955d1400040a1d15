use std::rc::Rc;

use crate::compare::Identity;

/// A registered function: a setter or a derived action.
///
/// Compared by identity, so re-registering the same `Action` is a no-op while
/// a freshly built closure counts as a change.
pub struct Action<A: 'static = ()>(Rc<dyn Fn(A)>);

impl<A: 'static> Action<A> {
    pub fn new(f: impl Fn(A) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Placeholder held by slice defaults until a layer registers the real one.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn call(&self, arg: A) {
        (self.0)(arg)
    }
}

impl Action<()> {
    pub fn run(&self) {
        (self.0)(())
    }
}

impl<A> Clone for Action<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Identity for Action<A> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<A> std::fmt::Debug for Action<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({:p})", Rc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn clones_share_identity() {
        let hits = Rc::new(Cell::new(0));
        let a = {
            let hits = hits.clone();
            Action::new(move |n: i32| hits.set(hits.get() + n))
        };
        let b = a.clone();
        b.call(2);
        a.call(3);
        assert_eq!(hits.get(), 5);
        assert!(a.same(&b));
        assert!(!a.same(&Action::noop()));
    }
}
