//! Profile domain
//!
//! This module provides the musician and venue profile entities, the
//! per-role validation rule sets, raw payload handling, and the
//! repository traits for the profile store.

mod entity;
mod payload;
mod repository;
mod validation;

pub use entity::{ExperienceLevel, MusicianProfile, Profile, ProfileId, VenueProfile, VenueType};
pub use payload::{NewMusicianProfile, NewVenueProfile, ProfilePayload};
pub use repository::{MusicianProfileRepository, VenueProfileRepository};
pub use validation::{validate_musician_data, validate_venue_data};

#[cfg(test)]
pub use repository::mock::{MockMusicianProfileRepository, MockVenueProfileRepository};
