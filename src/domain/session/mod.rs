//! Session domain
//!
//! Server-side session state: the identity record behind a cookie
//! token and the store trait every protected operation resolves
//! against.

mod entity;
mod store;

pub use entity::Session;
pub use store::SessionStore;
