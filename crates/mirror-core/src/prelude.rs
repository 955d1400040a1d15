pub use crate::action::Action;
pub use crate::compare::{Compare, Identity};
pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::MirrorError;
pub use crate::mirror_store;
pub use crate::reactive::{batch, untracked};
pub use crate::runtime::{Mounted, mount};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::slot::{Slot, SlotState};
pub use crate::store::{Mirror, MirrorRegistry, SlotInfo, Store, WeakRegistry};
