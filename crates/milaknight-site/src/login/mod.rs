//! The login route: same layering as the landing page over a smaller store.

mod form;
mod layers;
pub mod store;

use milaknight_context::AppContext;
use mirror_core::{Mirror, MirrorRegistry, Mounted, Scope};

use crate::component::{Component, mount_view};
use crate::markup::View;

pub use form::{EMAIL_PLACEHOLDER, LoginForm, PASSWORD_PLACEHOLDER};
pub use layers::{Init, State, Utils};
pub use store::{LoginKey, LoginStore};

pub struct Factory {
    scope: Scope,
    registry: MirrorRegistry<LoginStore>,
    _state: Mounted,
    form: Component,
}

impl Factory {
    pub fn mount(ctx: &AppContext) -> Self {
        let scope = Scope::new();
        let registry = MirrorRegistry::new(LoginStore::default());

        let (state, form) = scope.run(|| {
            Init(&registry);
            let state = State(&registry, &ctx.language);
            Utils(&registry);
            let form = mount_view("LoginForm", {
                let (mirror, ctx) = (registry.mirror(), ctx.clone());
                move || LoginForm(&mirror, &ctx)
            });
            (state, form)
        });

        Self {
            scope,
            registry,
            _state: state,
            form,
        }
    }

    pub fn mirror(&self) -> Mirror<LoginStore> {
        self.registry.mirror()
    }

    pub fn form(&self) -> &Component {
        &self.form
    }

    pub fn view(&self) -> View {
        self.form.view()
    }

    pub fn unmount(self) {
        log::debug!("login: unmount");
        self.scope.dispose();
    }
}
