//! Sync client for the rectangle drawer.
//!
//! Wires the pure gesture engine from the `geometry` crate to the remote
//! rectangle store: [`api`] speaks the HTTP JSON API, [`sync`] decides when
//! a network call is warranted, and [`drawer`] runs the session task that
//! consumes pointer events and publishes render state.

pub mod api;
pub mod drawer;
pub mod sync;

pub use api::{RectangleApi, RectangleStore, StoreError};
pub use drawer::{Drawer, DrawerError, DrawerStatus};
pub use sync::SyncRegister;
