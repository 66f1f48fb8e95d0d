//! Component state owned by each page behavior.
//!
//! ARCHITECTURE
//! ============
//! Each module is a small state object plus the host trait it needs. None of
//! them touch the DOM directly; `components` binds them to the browser.

pub mod contact;
pub mod modal;
pub mod progress;
pub mod scroll;
pub mod theme;
pub mod typing;
