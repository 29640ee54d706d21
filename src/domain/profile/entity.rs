//! Profile entities and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Store-assigned primary key for profile rows.
pub type ProfileId = i64;

/// Self-reported skill tier for musicians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Professional,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "professional" => Ok(Self::Professional),
            other => Err(DomainError::storage(format!(
                "Unknown experience level '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of establishment a venue account represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    Bar,
    Restaurant,
    Club,
    EventHall,
    Theater,
    Cafe,
    Other,
}

impl VenueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Restaurant => "restaurant",
            Self::Club => "club",
            Self::EventHall => "event_hall",
            Self::Theater => "theater",
            Self::Cafe => "cafe",
            Self::Other => "other",
        }
    }
}

impl FromStr for VenueType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(Self::Bar),
            "restaurant" => Ok(Self::Restaurant),
            "club" => Ok(Self::Club),
            "event_hall" => Ok(Self::EventHall),
            "theater" => Ok(Self::Theater),
            "cafe" => Ok(Self::Cafe),
            "other" => Ok(Self::Other),
            other => Err(DomainError::storage(format!(
                "Unknown venue type '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A musician's profile row.
///
/// Serializes directly into API responses, so the account reference
/// keeps its historical `user_id` wire name. List fields are held as
/// real lists here; the store serializes them on the way in and out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicianProfile {
    pub id: ProfileId,
    #[serde(rename = "user_id")]
    pub account_id: AccountId,
    pub name: String,
    pub bio: Option<String>,
    pub location: String,
    pub instruments: Vec<String>,
    pub genres: Option<Vec<String>>,
    pub experience_level: ExperienceLevel,
    pub years_experience: Option<i32>,
    pub available_for_gigs: bool,
    pub looking_for_band: bool,
    pub profile_photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A venue's profile row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueProfile {
    pub id: ProfileId,
    #[serde(rename = "user_id")]
    pub account_id: AccountId,
    pub business_name: String,
    pub bio: Option<String>,
    pub location: String,
    pub venue_type: VenueType,
    pub capacity: i32,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Either kind of profile, for the public lookup where the role is not
/// known ahead of the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Profile {
    Musician(MusicianProfile),
    Venue(VenueProfile),
}

impl Profile {
    pub fn profile_type(&self) -> &'static str {
        match self {
            Self::Musician(_) => "musician",
            Self::Venue(_) => "venue",
        }
    }
}
