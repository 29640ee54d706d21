//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;
pub mod profile;
pub mod session;
pub mod validation;

pub use account::{Account, AccountId, AccountRepository, NewAccount, Role};
pub use error::DomainError;
pub use profile::{
    ExperienceLevel, MusicianProfile, MusicianProfileRepository, NewMusicianProfile,
    NewVenueProfile, Profile, ProfileId, ProfilePayload, VenueProfile, VenueProfileRepository,
    VenueType,
};
pub use session::{Session, SessionStore};
pub use validation::ValidationReport;
