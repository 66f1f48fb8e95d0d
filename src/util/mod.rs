//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `text` is pure and used by the state layer. `storage` and `dom` isolate
//! browser concerns from component wiring so the state layer stays testable.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod storage;
pub mod text;
