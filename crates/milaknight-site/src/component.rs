use std::cell::RefCell;
use std::rc::Rc;

use mirror_core::{Mounted, mount};

use crate::markup::View;

/// A mounted leaf: its observer plus the view it produced last.
pub struct Component {
    mounted: Mounted,
    view: Rc<RefCell<View>>,
}

impl Component {
    pub fn name(&self) -> &'static str {
        self.mounted.name()
    }

    pub fn view(&self) -> View {
        self.view.borrow().clone()
    }

    pub fn renders(&self) -> usize {
        self.mounted.renders()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_mounted()
    }

    pub fn unmount(&self) {
        self.mounted.unmount();
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.mounted, f)
    }
}

/// Mount `render` and keep its output. Re-runs only when something it read
/// changes.
pub fn mount_view(name: &'static str, render: impl Fn() -> View + 'static) -> Component {
    let view = Rc::new(RefCell::new(crate::markup::El("template")));
    let mounted = mount(name, {
        let view = view.clone();
        move || {
            let next = render();
            *view.borrow_mut() = next;
        }
    });
    Component { mounted, view }
}

#[cfg(test)]
mod tests {
    use mirror_core::signal;

    use super::*;
    use crate::markup::{El, Text};

    #[test]
    fn keeps_latest_view() {
        let label = signal(String::from("one"));
        let c = mount_view("label", {
            let label = label.clone();
            move || El("span").child(Text(label.get()))
        });
        assert_eq!(c.view().to_html(), "<span>one</span>");

        label.set(String::from("two"));
        assert_eq!(c.view().to_html(), "<span>two</span>");
        assert_eq!(c.renders(), 2);

        c.unmount();
        label.set(String::from("three"));
        assert_eq!(c.view().to_html(), "<span>two</span>");
    }
}
