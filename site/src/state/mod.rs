//! Browser-independent state for the page controllers.
//!
//! DESIGN
//! ======
//! Each controller keeps its decisions here as plain Rust so they are tested
//! natively; the `controllers` modules only translate DOM events in and
//! effects out.

pub mod suggest;
pub mod theme;
