use std::cell::RefCell;
use std::rc::Rc;

/// Cleanup handle. Cloning shares the same cleanup.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.0.borrow().is_none()
    }

    /// Hand the cleanup to the current scope, if there is one.
    pub(crate) fn attach_to_current_scope(&self) {
        if let Some(scope) = crate::scope::current_scope() {
            let d = self.clone();
            scope.add_disposer(move || d.run());
        }
    }
}

impl std::fmt::Debug for Dispose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispose")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Run `f` when the current scope is disposed. Without a scope, `f` runs only
/// through the returned handle.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    let d = Dispose::new(f);
    d.attach_to_current_scope();
    d
}
