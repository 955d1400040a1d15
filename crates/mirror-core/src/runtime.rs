use std::cell::Cell;
use std::rc::Rc;

use crate::effects::Dispose;
use crate::reactive::{self, ObserverId};

/// A mounted component: an observer re-run whenever a key it read during its
/// last render changes.
pub struct Mounted {
    name: &'static str,
    id: ObserverId,
    renders: Rc<Cell<usize>>,
    dispose: Dispose,
}

impl Mounted {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How many times the render function has run, including the first.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    pub fn is_mounted(&self) -> bool {
        reactive::is_alive(self.id)
    }

    /// Drop every dependency edge; later changes never reach this component.
    pub fn unmount(&self) {
        if !self.dispose.is_disposed() {
            log::debug!("unmount {}", self.name);
        }
        self.dispose.run();
    }
}

impl std::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mounted")
            .field("name", &self.name)
            .field("renders", &self.renders.get())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Mount `render` as a component. It runs once now, tracking what it reads,
/// and is unmounted with the current [`Scope`](crate::Scope) or through
/// [`Mounted::unmount`].
///
/// Writes made during a render are batched and delivered after it returns.
pub fn mount(name: &'static str, render: impl Fn() + 'static) -> Mounted {
    let renders = Rc::new(Cell::new(0));
    let id = reactive::new_observer(name, {
        let renders = renders.clone();
        move || {
            renders.set(renders.get() + 1);
            render();
        }
    });
    let dispose = Dispose::new(move || reactive::remove_observer(id));
    dispose.attach_to_current_scope();

    log::debug!("mount {name}");
    reactive::run_observer_now(id);

    Mounted {
        name,
        id,
        renders,
        dispose,
    }
}
