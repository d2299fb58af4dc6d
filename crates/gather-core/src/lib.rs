//! Client-side entity store for activity records.
//!
//! The store keeps the canonical in-memory collection of activities in
//! sync with a remote service: every create/read/update/delete goes
//! through the [`store::ActivityStore`] orchestrator, which tracks busy
//! state per operation and commits results atomically so presentation
//! layers never observe a half-applied change.
//!
//! The backend is a seam: [`backend::ActivityBackend`] is implemented
//! over HTTP by the `gather_agent` crate and in process by
//! [`dispatch::MemoryService`].

pub mod activity;
pub mod backend;
pub mod datetime;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod selection;
pub mod store;
pub mod tracker;
pub mod views;

pub use activity::Activity;
pub use backend::ActivityBackend;
pub use error::{BackendError, StoreError};
pub use store::{ActivityStore, StoreSnapshot};
