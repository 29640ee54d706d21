//! Account domain
//!
//! This module provides the account entity, registration validation,
//! and the credential store repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId, NewAccount, Role};
pub use repository::AccountRepository;
pub use validation::validate_registration;

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
