//! In-process session storage

mod in_memory;

pub use in_memory::{spawn_expiry_sweeper, InMemorySessionStore};
