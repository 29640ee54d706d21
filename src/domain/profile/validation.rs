//! Per-role profile rule sets
//!
//! Stateless and side-effect free so the rules can be unit tested
//! without a store. Each rule set runs every check and reports all
//! violations in submission order.

use serde_json::Value;

use crate::domain::profile::entity::{ExperienceLevel, VenueType};
use crate::domain::profile::payload::{is_blank, is_falsy, ProfilePayload};
use crate::domain::validation::ValidationReport;

const MAX_NAME_LENGTH: usize = 100;
const MAX_BIO_LENGTH: usize = 500;
const MAX_LOCATION_LENGTH: usize = 100;
const MAX_CONTACT_PERSON_LENGTH: usize = 100;
const MAX_PHONE_LENGTH: usize = 20;
const MAX_WEBSITE_LENGTH: usize = 500;
const MIN_CAPACITY: f64 = 10.0;
const MAX_CAPACITY: f64 = 100_000.0;
const MIN_YEARS_EXPERIENCE: f64 = 0.0;
const MAX_YEARS_EXPERIENCE: f64 = 70.0;

fn string_over(value: &Value, limit: usize) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.chars().count() > limit)
}

fn present_and_not_string(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !is_falsy(v) && !v.is_string())
}

/// Validate a candidate musician profile payload.
pub fn validate_musician_data(data: &ProfilePayload) -> ValidationReport {
    let mut errors = Vec::new();

    let name = data.get("name");
    let location = data.get("location");
    let experience_level = data.get("experience_level");
    let instruments = data.get("instruments");

    // Required fields
    if name.is_none_or(is_blank) {
        errors.push("Name is required".to_string());
    }

    if location.is_none_or(is_blank) {
        errors.push("Location is required".to_string());
    }

    if experience_level.is_none_or(is_blank) {
        errors.push("Experience level is required".to_string());
    }

    let has_instruments = instruments
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty());
    if !has_instruments {
        errors.push("At least one instrument is required".to_string());
    }

    // Types and lengths
    if present_and_not_string(name) {
        errors.push("Name must be a string".to_string());
    }

    if name.is_some_and(|v| string_over(v, MAX_NAME_LENGTH)) {
        errors.push("Name must be less than 100 characters".to_string());
    }

    if present_and_not_string(data.get("bio")) {
        errors.push("Bio must be a string".to_string());
    }

    if data
        .get("bio")
        .is_some_and(|v| string_over(v, MAX_BIO_LENGTH))
    {
        errors.push("Bio must be less than 500 characters".to_string());
    }

    // Closed enum values
    if experience_level.is_some_and(|v| !is_falsy(v)) {
        let known = experience_level
            .and_then(Value::as_str)
            .is_some_and(|s| s.parse::<ExperienceLevel>().is_ok());
        if !known {
            errors.push(
                "Experience level must be beginner, intermediate, or professional".to_string(),
            );
        }
    }

    // Lists
    if let Some(items) = instruments.and_then(Value::as_array) {
        if items.iter().any(|item| !item.is_string()) {
            errors.push("All instruments must be strings".to_string());
        }
    }

    if data
        .get("genres")
        .is_some_and(|v| !is_falsy(v) && !v.is_array())
    {
        errors.push("Genres must be an array".to_string());
    }

    // Numbers
    if let Some(value) = data.get("years_experience") {
        let in_range = value
            .as_f64()
            .is_some_and(|n| (MIN_YEARS_EXPERIENCE..=MAX_YEARS_EXPERIENCE).contains(&n));
        if !in_range {
            errors.push("Years of experience must be a number between 0 and 70".to_string());
        }
    }

    // Booleans
    if data
        .get("available_for_gigs")
        .is_some_and(|v| !v.is_boolean())
    {
        errors.push("Available for gigs must be true or false".to_string());
    }

    if data
        .get("looking_for_band")
        .is_some_and(|v| !v.is_boolean())
    {
        errors.push("Looking for band must be true or false".to_string());
    }

    ValidationReport::new(errors)
}

/// Validate a candidate venue profile payload.
pub fn validate_venue_data(data: &ProfilePayload) -> ValidationReport {
    let mut errors = Vec::new();

    let business_name = data.get("business_name");
    let location = data.get("location");
    let venue_type = data.get("venue_type");
    let capacity = data.get("capacity");

    // Required fields
    if business_name.is_none_or(is_blank) {
        errors.push("Venue Name is required".to_string());
    }

    if location.is_none_or(is_blank) {
        errors.push("Location is required".to_string());
    }

    if venue_type.is_none_or(is_blank) {
        errors.push("Venue Type is required".to_string());
    }

    if capacity.is_none_or(|v| is_falsy(v) || !v.is_number()) {
        errors.push("Capacity is a number".to_string());
    }

    // Types and lengths
    if present_and_not_string(business_name) {
        errors.push("Venue Name needs to be a string".to_string());
    }

    if business_name.is_some_and(|v| string_over(v, MAX_NAME_LENGTH)) {
        errors.push("Venue name can not exceed 100 characters!".to_string());
    }

    if present_and_not_string(data.get("bio")) {
        errors.push("Bio needs to be a string".to_string());
    }

    if data
        .get("bio")
        .is_some_and(|v| string_over(v, MAX_BIO_LENGTH))
    {
        errors.push("Bio needs to be less than 500 characters".to_string());
    }

    if location.is_some_and(|v| string_over(v, MAX_LOCATION_LENGTH)) {
        errors.push("Location needs to be under 100 characters".to_string());
    }

    // Closed enum values
    if venue_type.is_some_and(|v| !is_falsy(v)) {
        let known = venue_type
            .and_then(Value::as_str)
            .is_some_and(|s| s.parse::<VenueType>().is_ok());
        if !known {
            errors.push(
                "Venue type must be one of: bar, restaurant, club, event_hall, theater, cafe, or other"
                    .to_string(),
            );
        }
    }

    // Numbers
    if let Some(value) = capacity {
        let in_range = value
            .as_f64()
            .is_some_and(|n| (MIN_CAPACITY..=MAX_CAPACITY).contains(&n));
        if !in_range {
            errors.push("Capacity must be a number between 10 and 100,000".to_string());
        }
    }

    // Optional fields
    if let Some(value) = data.get("contact_person") {
        if !value.is_string() {
            errors.push("Contact person must be a string".to_string());
        }
        if !is_falsy(value) && string_over(value, MAX_CONTACT_PERSON_LENGTH) {
            errors.push("Contact person name must be less than 100 characters".to_string());
        }
    }

    if let Some(value) = data.get("phone_number") {
        if !value.is_string() {
            errors.push("Phone number must be a string".to_string());
        }
        if !is_falsy(value) && string_over(value, MAX_PHONE_LENGTH) {
            errors.push("Phone number must be less than 20 characters".to_string());
        }
    }

    if let Some(value) = data.get("website_url") {
        if !value.is_string() {
            errors.push("Website URL must be a string".to_string());
        }
        if !is_falsy(value) && string_over(value, MAX_WEBSITE_LENGTH) {
            errors.push("Website URL must be less than 500 characters".to_string());
        }
        let well_formed = value
            .as_str()
            .is_none_or(|s| s.is_empty() || s.starts_with("http://") || s.starts_with("https://"));
        if !well_formed {
            errors.push("Website URL must start with http:// or https://".to_string());
        }
    }

    ValidationReport::new(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ProfilePayload {
        value.as_object().cloned().unwrap()
    }

    fn valid_musician() -> ProfilePayload {
        payload(json!({
            "name": "Jo",
            "location": "NYC",
            "experience_level": "beginner",
            "instruments": ["guitar"],
        }))
    }

    fn valid_venue() -> ProfilePayload {
        payload(json!({
            "business_name": "The Spot",
            "location": "NYC",
            "venue_type": "bar",
            "capacity": 150,
        }))
    }

    #[test]
    fn test_valid_musician_payload() {
        let report = validate_musician_data(&valid_musician());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_empty_musician_payload_reports_every_required_field() {
        let report = validate_musician_data(&payload(json!({})));
        assert_eq!(
            report.errors,
            vec![
                "Name is required",
                "Location is required",
                "Experience level is required",
                "At least one instrument is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let mut data = valid_musician();
        data.insert("name".to_string(), json!("   "));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["Name is required"]);
    }

    #[test]
    fn test_non_string_name_reports_type_not_presence() {
        let mut data = valid_musician();
        data.insert("name".to_string(), json!(123));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["Name must be a string"]);
    }

    #[test]
    fn test_name_length_boundary() {
        let mut data = valid_musician();
        data.insert("name".to_string(), json!("a".repeat(100)));
        assert!(validate_musician_data(&data).is_valid());

        data.insert("name".to_string(), json!("a".repeat(101)));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["Name must be less than 100 characters"]);
    }

    #[test]
    fn test_unknown_experience_level() {
        let mut data = valid_musician();
        data.insert("experience_level".to_string(), json!("expert"));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec!["Experience level must be beginner, intermediate, or professional"]
        );
    }

    #[test]
    fn test_empty_instruments_list() {
        let mut data = valid_musician();
        data.insert("instruments".to_string(), json!([]));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["At least one instrument is required"]);
    }

    #[test]
    fn test_mixed_type_instruments() {
        let mut data = valid_musician();
        data.insert("instruments".to_string(), json!(["guitar", 4]));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["All instruments must be strings"]);
    }

    #[test]
    fn test_genres_must_be_a_list() {
        let mut data = valid_musician();
        data.insert("genres".to_string(), json!("rock"));
        let report = validate_musician_data(&data);
        assert_eq!(report.errors, vec!["Genres must be an array"]);

        // Null is tolerated the same as an absent field
        data.insert("genres".to_string(), json!(null));
        assert!(validate_musician_data(&data).is_valid());
    }

    #[test]
    fn test_years_experience_bounds() {
        let mut data = valid_musician();
        data.insert("years_experience".to_string(), json!(70));
        assert!(validate_musician_data(&data).is_valid());

        data.insert("years_experience".to_string(), json!(71));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec!["Years of experience must be a number between 0 and 70"]
        );

        data.insert("years_experience".to_string(), json!(-1));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec!["Years of experience must be a number between 0 and 70"]
        );

        // Present but null is a violation, unlike a missing field
        data.insert("years_experience".to_string(), json!(null));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec!["Years of experience must be a number between 0 and 70"]
        );
    }

    #[test]
    fn test_flags_must_be_boolean() {
        let mut data = valid_musician();
        data.insert("available_for_gigs".to_string(), json!("yes"));
        data.insert("looking_for_band".to_string(), json!(1));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec![
                "Available for gigs must be true or false",
                "Looking for band must be true or false",
            ]
        );
    }

    #[test]
    fn test_all_musician_violations_reported_in_order() {
        let data = payload(json!({
            "name": "a".repeat(101),
            "bio": 7,
            "experience_level": "expert",
            "instruments": [],
            "genres": "rock",
            "years_experience": 71,
        }));
        let report = validate_musician_data(&data);
        assert_eq!(
            report.errors,
            vec![
                "Location is required",
                "At least one instrument is required",
                "Name must be less than 100 characters",
                "Bio must be a string",
                "Experience level must be beginner, intermediate, or professional",
                "Genres must be an array",
                "Years of experience must be a number between 0 and 70",
            ]
        );
    }

    #[test]
    fn test_valid_venue_payload() {
        let report = validate_venue_data(&valid_venue());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_empty_venue_payload_reports_every_required_field() {
        let report = validate_venue_data(&payload(json!({})));
        assert_eq!(
            report.errors,
            vec![
                "Venue Name is required",
                "Location is required",
                "Venue Type is required",
                "Capacity is a number",
            ]
        );
    }

    #[test]
    fn test_unknown_venue_type() {
        let mut data = valid_venue();
        data.insert("venue_type".to_string(), json!("arena"));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec![
                "Venue type must be one of: bar, restaurant, club, event_hall, theater, cafe, or other"
            ]
        );
    }

    #[test]
    fn test_capacity_bounds() {
        let mut data = valid_venue();
        for ok in [10, 100_000] {
            data.insert("capacity".to_string(), json!(ok));
            assert!(validate_venue_data(&data).is_valid(), "capacity {}", ok);
        }

        data.insert("capacity".to_string(), json!(9));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec!["Capacity must be a number between 10 and 100,000"]
        );

        data.insert("capacity".to_string(), json!(100_001));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec!["Capacity must be a number between 10 and 100,000"]
        );
    }

    #[test]
    fn test_zero_capacity_reports_both_checks() {
        let mut data = valid_venue();
        data.insert("capacity".to_string(), json!(0));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec![
                "Capacity is a number",
                "Capacity must be a number between 10 and 100,000",
            ]
        );
    }

    #[test]
    fn test_website_url_scheme() {
        let mut data = valid_venue();
        for ok in ["http://x", "https://x"] {
            data.insert("website_url".to_string(), json!(ok));
            assert!(validate_venue_data(&data).is_valid(), "url {}", ok);
        }

        data.insert("website_url".to_string(), json!("ftp://x"));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec!["Website URL must start with http:// or https://"]
        );
    }

    #[test]
    fn test_optional_venue_field_types_and_lengths() {
        let mut data = valid_venue();
        data.insert("contact_person".to_string(), json!(42));
        data.insert("phone_number".to_string(), json!("5".repeat(21)));
        data.insert("website_url".to_string(), json!("https://".to_string() + &"x".repeat(500)));
        let report = validate_venue_data(&data);
        assert_eq!(
            report.errors,
            vec![
                "Contact person must be a string",
                "Phone number must be less than 20 characters",
                "Website URL must be less than 500 characters",
            ]
        );
    }

    #[test]
    fn test_empty_optional_strings_pass() {
        let mut data = valid_venue();
        data.insert("contact_person".to_string(), json!(""));
        data.insert("phone_number".to_string(), json!(""));
        data.insert("website_url".to_string(), json!(""));
        assert!(validate_venue_data(&data).is_valid());
    }

    #[test]
    fn test_location_length_only_checked_for_venues() {
        let long_location = "a".repeat(101);

        let mut venue = valid_venue();
        venue.insert("location".to_string(), json!(long_location.clone()));
        let report = validate_venue_data(&venue);
        assert_eq!(
            report.errors,
            vec!["Location needs to be under 100 characters"]
        );

        let mut musician = valid_musician();
        musician.insert("location".to_string(), json!(long_location));
        assert!(validate_musician_data(&musician).is_valid());
    }
}
