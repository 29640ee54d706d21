//! Authentication services

mod password;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, AuthenticatedAccount, RegisterRequest};
