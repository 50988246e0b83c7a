//! Adapters between the counter and the outside world: the operator console
//! and menu files.

pub mod console;
pub mod csv;
