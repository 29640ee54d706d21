//! Raw profile payloads and the typed insert shapes built from them
//!
//! Mutating profile requests arrive as loosely typed JSON objects so
//! the rule sets can inspect every field and report all violations in
//! one pass instead of failing at deserialization. Once a payload has
//! passed validation it is converted into a typed insert shape here.

use serde_json::{Map, Value};

use crate::domain::account::AccountId;
use crate::domain::profile::entity::{ExperienceLevel, VenueType};
use crate::domain::DomainError;

/// A candidate profile body: field name to loosely typed value.
pub type ProfilePayload = Map<String, Value>;

/// Required-field checks treat null, false, zero, and the empty string
/// as absent.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Required text checks also reject whitespace-only strings.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        other => is_falsy(other),
    }
}

/// Fields for a musician profile insert, built from a validated payload.
#[derive(Debug, Clone)]
pub struct NewMusicianProfile {
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
}

impl NewMusicianProfile {
    /// Build the insert shape from a payload that already passed
    /// `validate_musician_data`.
    pub fn from_payload(
        account_id: AccountId,
        data: &ProfilePayload,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            account_id,
            name: required_string(data, "name")?,
            bio: optional_string(data, "bio"),
            location: required_string(data, "location")?,
            instruments: string_list(data, "instruments")?,
            genres: optional_string_list(data, "genres")?,
            experience_level: required_string(data, "experience_level")?.parse()?,
            years_experience: optional_integer(data, "years_experience")?,
            available_for_gigs: bool_or(data, "available_for_gigs", true),
            looking_for_band: bool_or(data, "looking_for_band", false),
            profile_photo_url: optional_string(data, "profile_photo_url"),
        })
    }
}

/// Fields for a venue profile insert, built from a validated payload.
#[derive(Debug, Clone)]
pub struct NewVenueProfile {
    pub account_id: AccountId,
    pub business_name: String,
    pub bio: Option<String>,
    pub location: String,
    pub venue_type: VenueType,
    pub capacity: i32,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
}

impl NewVenueProfile {
    /// Build the insert shape from a payload that already passed
    /// `validate_venue_data`.
    pub fn from_payload(
        account_id: AccountId,
        data: &ProfilePayload,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            account_id,
            business_name: required_string(data, "business_name")?,
            bio: optional_string(data, "bio"),
            location: required_string(data, "location")?,
            venue_type: required_string(data, "venue_type")?.parse()?,
            capacity: required_integer(data, "capacity")?,
            contact_person: optional_string(data, "contact_person"),
            phone_number: optional_string(data, "phone_number"),
            website_url: optional_string(data, "website_url"),
        })
    }
}

fn conversion_error(field: &str) -> DomainError {
    DomainError::internal(format!(
        "Profile field '{}' could not be converted for storage",
        field
    ))
}

fn required_string(data: &ProfilePayload, field: &str) -> Result<String, DomainError> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| conversion_error(field))
}

/// Empty strings are stored as absent, the same as a missing field.
fn optional_string(data: &ProfilePayload, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_list(data: &ProfilePayload, field: &str) -> Result<Vec<String>, DomainError> {
    data.get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| conversion_error(field))
                })
                .collect()
        })
        .ok_or_else(|| conversion_error(field))?
}

fn optional_string_list(
    data: &ProfilePayload,
    field: &str,
) -> Result<Option<Vec<String>>, DomainError> {
    match data.get(field) {
        Some(Value::Array(_)) => string_list(data, field).map(Some),
        _ => Ok(None),
    }
}

/// Numeric fields persist as integers; a fractional value passes the
/// range rules but is rejected here, surfacing as an internal error the
/// same way the store itself would refuse it.
fn optional_integer(data: &ProfilePayload, field: &str) -> Result<Option<i32>, DomainError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => {
            let n = value.as_i64().ok_or_else(|| conversion_error(field))?;
            i32::try_from(n).map(Some).map_err(|_| conversion_error(field))
        }
    }
}

fn required_integer(data: &ProfilePayload, field: &str) -> Result<i32, DomainError> {
    optional_integer(data, field)?.ok_or_else(|| conversion_error(field))
}

fn bool_or(data: &ProfilePayload, field: &str, default: bool) -> bool {
    data.get(field).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProfilePayload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }

    #[test]
    fn test_blank_strings() {
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!("")));
        assert!(!is_blank(&json!(" x ")));
        assert!(!is_blank(&json!(5)));
    }

    #[test]
    fn test_musician_defaults() {
        let data = payload(json!({
            "name": "Jo",
            "location": "NYC",
            "experience_level": "beginner",
            "instruments": ["guitar"],
        }));

        let profile = NewMusicianProfile::from_payload(1, &data).unwrap();
        assert!(profile.available_for_gigs);
        assert!(!profile.looking_for_band);
        assert_eq!(profile.genres, None);
        assert_eq!(profile.years_experience, None);
        assert_eq!(profile.bio, None);
    }

    #[test]
    fn test_musician_explicit_fields() {
        let data = payload(json!({
            "name": "Jo",
            "bio": "plays loud",
            "location": "NYC",
            "experience_level": "professional",
            "instruments": ["guitar", "bass"],
            "genres": [],
            "years_experience": 0,
            "available_for_gigs": false,
            "looking_for_band": true,
        }));

        let profile = NewMusicianProfile::from_payload(1, &data).unwrap();
        assert_eq!(profile.instruments, vec!["guitar", "bass"]);
        // An explicit empty list is kept, unlike an absent field
        assert_eq!(profile.genres, Some(vec![]));
        // Zero is a legal amount of experience
        assert_eq!(profile.years_experience, Some(0));
        assert!(!profile.available_for_gigs);
        assert!(profile.looking_for_band);
    }

    #[test]
    fn test_empty_bio_stored_as_absent() {
        let data = payload(json!({
            "name": "Jo",
            "bio": "",
            "location": "NYC",
            "experience_level": "beginner",
            "instruments": ["guitar"],
        }));

        let profile = NewMusicianProfile::from_payload(1, &data).unwrap();
        assert_eq!(profile.bio, None);
    }

    #[test]
    fn test_fractional_years_rejected_at_conversion() {
        let data = payload(json!({
            "name": "Jo",
            "location": "NYC",
            "experience_level": "beginner",
            "instruments": ["guitar"],
            "years_experience": 5.5,
        }));

        let err = NewMusicianProfile::from_payload(1, &data).unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[test]
    fn test_venue_conversion() {
        let data = payload(json!({
            "business_name": "The Spot",
            "location": "NYC",
            "venue_type": "event_hall",
            "capacity": 250,
            "website_url": "https://spot.example",
        }));

        let profile = NewVenueProfile::from_payload(9, &data).unwrap();
        assert_eq!(profile.account_id, 9);
        assert_eq!(profile.venue_type, VenueType::EventHall);
        assert_eq!(profile.capacity, 250);
        assert_eq!(profile.contact_person, None);
        assert_eq!(
            profile.website_url,
            Some("https://spot.example".to_string())
        );
    }
}
