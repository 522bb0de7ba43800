//! Core handler infrastructure.
//!
//! The [`Registry`] maps command names to [`Handler`]s and applies the
//! registration gate; the [`Context`] gives each handler the requesting
//! connection and mutable access to the [`Matrix`](crate::state::Matrix).

pub mod context;
pub mod registry;

pub use context::{Context, Handler};
pub use registry::Registry;
