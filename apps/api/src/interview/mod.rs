// Interview core: question catalog, follow-up triggers and session progression.
// Everything here is synchronous and free of I/O; handlers own the store.

pub mod catalog;
pub mod follow_up;
pub mod handlers;
pub mod progression;
