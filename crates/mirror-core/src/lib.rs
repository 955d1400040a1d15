//! # Mirror registry
//!
//! A small reactive core for sharing UI state between components that should
//! not know about each other. There are three main pieces:
//!
//! - `Signal<T>`: observable value with change-only notification.
//! - `mirror_store!`: typed slots grouped into slices, one key enum per store.
//! - `mount`: components as observers, torn down with their `Scope`.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use mirror_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Reads participate in a dependency graph: when you call `get()` inside a
//! mounted component, future writes to that signal re-run the component.
//! Writing an equal value is not a change and notifies nobody.
//!
//! ## Register once, mirror everywhere
//!
//! Layered wrappers own a [`MirrorRegistry`] and register values under typed
//! keys on every render. Presentational components get a [`Mirror`], which can
//! only subscribe:
//!
//! ```rust
//! use mirror_core::*;
//!
//! mirror_store! {
//!     pub struct MenuStore keyed by MenuKey;
//!
//!     slice state: MenuState {
//!         IsOpen("isOpen") => is_open: bool = shallow,
//!         Title("title") => title: String = shallow,
//!     }
//! }
//!
//! impl Default for MenuState {
//!     fn default() -> Self {
//!         Self { is_open: false, title: "Menu".into() }
//!     }
//! }
//!
//! let registry = MirrorRegistry::new(MenuStore::default());
//! let mirror = registry.mirror();
//!
//! let view = mount("menu", {
//!     let mirror = mirror.clone();
//!     move || {
//!         let _open = mirror.subscribe(|s| &s.is_open);
//!     }
//! });
//!
//! registry.register(|s| &s.title, String::from("Navigation")); // not read by `menu`
//! assert_eq!(view.renders(), 1);
//!
//! registry.register(|s| &s.is_open, true);
//! assert_eq!(view.renders(), 2);
//! ```
//!
//! ## Batching
//!
//! Writes inside [`batch`] reach subscribers together once the batch ends, so
//! nobody observes half an update. Renders are batched the same way.
//!
//! ## Cleanup
//!
//! `mount` and `watch` attach their cleanup to the current [`Scope`]. Disposing
//! the scope (or calling [`Mounted::unmount`]) removes the observer and all of
//! its edges, so later registrations never reach it.

pub mod action;
pub mod compare;
pub mod effects;
pub mod error;
mod macros;
pub mod prelude;
pub mod reactive;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod slot;
pub mod store;
mod tests;

pub use action::*;
pub use compare::{Compare, Identity};
pub use effects::*;
pub use error::*;
pub use reactive::{batch, untracked};
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use slot::*;
pub use store::*;
