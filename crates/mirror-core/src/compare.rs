use std::rc::Rc;

/// How a slot decides whether a newly registered value is a change.
///
/// Fixed per key when the slice is defined; call sites never pick it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Compare {
    /// `PartialEq` on the value. Flags, numbers, strings.
    #[default]
    Shallow,
    /// Reference identity. For values that are already stable composites
    /// (a translation bundle) or functions (actions); they are replaced
    /// wholesale and never diffed field by field.
    Identity,
}

/// Reference identity for values stored under [`Compare::Identity`].
pub trait Identity {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &'static T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

pub(crate) fn shallow_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

pub(crate) fn identity_eq<T: Identity>(a: &T, b: &T) -> bool {
    a.same(b)
}
