//! Gridcrush (workspace facade crate).
//!
//! This package keeps the public `gridcrush::{core,session,types}` API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use gridcrush_core as core;
pub use gridcrush_session as session;
pub use gridcrush_types as types;
