//! Helpers shared across controllers.
//!
//! `storage` is host-testable; `dom` and `frame` touch browser APIs and only
//! build with the `csr` feature.

#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod frame;
pub mod storage;
