//! Pure site models.
//!
//! DESIGN
//! ======
//! Everything here is plain owned data with no browser dependency, split by
//! concern so each controller depends on one small model and every rule runs
//! in host tests.

pub mod cards;
pub mod catalog;
pub mod counter;
pub mod diagnostics;
pub mod head;
pub mod media;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod search;
pub mod theme;
pub mod viewport;
