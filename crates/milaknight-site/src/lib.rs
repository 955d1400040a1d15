#![allow(non_snake_case)]
//! # Milaknight site
//!
//! The landing and login pages. Each page is a `Factory` that mounts its
//! layers in a fixed order (Init, State, Utils) and then its presentational
//! leaves:
//!
//! - layers own a [`MirrorRegistry`](mirror_core::MirrorRegistry) and register
//!   values and actions under the page's keys;
//! - leaves receive a [`Mirror`](mirror_core::Mirror), subscribe to the few
//!   keys they render, and re-render only when those change.
//!
//! ```rust
//! use milaknight_site::landing;
//! use milaknight_context::AppContext;
//!
//! let ctx = AppContext::ephemeral();
//! let page = landing::Factory::mount(&ctx);
//! let header = page.component("Header").unwrap();
//!
//! page.mirror().peek(|s| &s.handle_mobile_menu_toggle).run();
//! assert!(page.mirror().peek(|s| &s.is_mobile_menu_open));
//! assert_eq!(header.renders(), 2);
//! ```

pub mod common;
pub mod component;
pub mod export;
pub mod landing;
pub mod login;
pub mod markup;

pub use component::{Component, mount_view};
pub use export::{ExportError, export_site, render_route};
pub use markup::View;
