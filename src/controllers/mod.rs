//! Browser bindings. Each controller looks up its markup in `install`,
//! wires listeners, and holds them for as long as it lives.

pub mod a11y;
pub mod cards;
pub mod counter;
pub mod diagnostics;
pub mod head;
pub mod media;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod search;
pub mod theme;
