//! Browser helpers shared by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! web-sys lookups and listener registration live here so controllers read as
//! event handlers rather than binding boilerplate.

pub mod dom;
