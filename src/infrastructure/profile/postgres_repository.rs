//! PostgreSQL profile repository implementations
//!
//! List-typed fields (instruments, genres) are stored as JSON-encoded
//! text and decoded back into lists on every read, keeping element
//! order intact.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tokio::time::timeout;

use crate::domain::account::AccountId;
use crate::domain::profile::{
    MusicianProfile, MusicianProfileRepository, NewMusicianProfile, NewVenueProfile, ProfileId,
    VenueProfile, VenueProfileRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_insert_error;

const MUSICIAN_COLUMNS: &str = "id, user_id, name, bio, location, instruments, genres, \
     experience_level, years_experience, available_for_gigs, looking_for_band, \
     profile_photo_url, created_at";

const VENUE_COLUMNS: &str = "id, user_id, business_name, bio, location, venue_type, capacity, \
     contact_person, phone_number, website_url, created_at";

fn timed_out(_: tokio::time::error::Elapsed) -> DomainError {
    DomainError::unavailable("Profile store call timed out")
}

fn encode_list(field: &str, list: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(list)
        .map_err(|e| DomainError::internal(format!("Failed to serialize {}: {}", field, e)))
}

fn decode_list(field: &str, text: &str) -> Result<Vec<String>, DomainError> {
    serde_json::from_str(text)
        .map_err(|e| DomainError::storage(format!("Corrupt {} value in store: {}", field, e)))
}

/// PostgreSQL implementation of MusicianProfileRepository
#[derive(Debug, Clone)]
pub struct PostgresMusicianProfileRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresMusicianProfileRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl MusicianProfileRepository for PostgresMusicianProfileRepository {
    async fn get(&self, id: ProfileId) -> Result<Option<MusicianProfile>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                "SELECT {} FROM musician_profiles WHERE id = $1",
                MUSICIAN_COLUMNS
            ))
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get musician profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_musician_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<MusicianProfile>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                "SELECT {} FROM musician_profiles WHERE user_id = $1",
                MUSICIAN_COLUMNS
            ))
            .bind(account_id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get musician profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_musician_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(
        &self,
        profile: NewMusicianProfile,
    ) -> Result<MusicianProfile, DomainError> {
        let instruments = encode_list("instruments", &profile.instruments)?;
        let genres = profile
            .genres
            .as_ref()
            .map(|g| encode_list("genres", g))
            .transpose()?;

        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                r#"
                INSERT INTO musician_profiles
                    (user_id, name, bio, location, instruments, genres, experience_level,
                     years_experience, available_for_gigs, looking_for_band, profile_photo_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING {}
                "#,
                MUSICIAN_COLUMNS
            ))
            .bind(profile.account_id)
            .bind(&profile.name)
            .bind(&profile.bio)
            .bind(&profile.location)
            .bind(&instruments)
            .bind(&genres)
            .bind(profile.experience_level.as_str())
            .bind(profile.years_experience)
            .bind(profile.available_for_gigs)
            .bind(profile.looking_for_band)
            .bind(&profile.profile_photo_url)
            .fetch_one(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| map_insert_error(e, "user already has a musician profile"))?;

        row_to_musician_profile(&row)
    }

    async fn update(
        &self,
        profile: NewMusicianProfile,
    ) -> Result<Option<MusicianProfile>, DomainError> {
        let instruments = encode_list("instruments", &profile.instruments)?;
        let genres = profile
            .genres
            .as_ref()
            .map(|g| encode_list("genres", g))
            .transpose()?;

        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                r#"
                UPDATE musician_profiles
                SET name = $2, bio = $3, location = $4, instruments = $5, genres = $6,
                    experience_level = $7, years_experience = $8, available_for_gigs = $9,
                    looking_for_band = $10, profile_photo_url = $11
                WHERE user_id = $1
                RETURNING {}
                "#,
                MUSICIAN_COLUMNS
            ))
            .bind(profile.account_id)
            .bind(&profile.name)
            .bind(&profile.bio)
            .bind(&profile.location)
            .bind(&instruments)
            .bind(&genres)
            .bind(profile.experience_level.as_str())
            .bind(profile.years_experience)
            .bind(profile.available_for_gigs)
            .bind(profile.looking_for_band)
            .bind(&profile.profile_photo_url)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to update musician profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_musician_profile(&row)?)),
            None => Ok(None),
        }
    }
}

/// PostgreSQL implementation of VenueProfileRepository
#[derive(Debug, Clone)]
pub struct PostgresVenueProfileRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresVenueProfileRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl VenueProfileRepository for PostgresVenueProfileRepository {
    async fn get(&self, id: ProfileId) -> Result<Option<VenueProfile>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                "SELECT {} FROM venue_profiles WHERE id = $1",
                VENUE_COLUMNS
            ))
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get venue profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_venue_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<VenueProfile>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                "SELECT {} FROM venue_profiles WHERE user_id = $1",
                VENUE_COLUMNS
            ))
            .bind(account_id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to get venue profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_venue_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, profile: NewVenueProfile) -> Result<VenueProfile, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                r#"
                INSERT INTO venue_profiles
                    (user_id, business_name, bio, location, venue_type, capacity,
                     contact_person, phone_number, website_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {}
                "#,
                VENUE_COLUMNS
            ))
            .bind(profile.account_id)
            .bind(&profile.business_name)
            .bind(&profile.bio)
            .bind(&profile.location)
            .bind(profile.venue_type.as_str())
            .bind(profile.capacity)
            .bind(&profile.contact_person)
            .bind(&profile.phone_number)
            .bind(&profile.website_url)
            .fetch_one(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| map_insert_error(e, "User already has a venue profile"))?;

        row_to_venue_profile(&row)
    }

    async fn update(
        &self,
        profile: NewVenueProfile,
    ) -> Result<Option<VenueProfile>, DomainError> {
        let row = timeout(
            self.query_timeout,
            sqlx::query(&format!(
                r#"
                UPDATE venue_profiles
                SET business_name = $2, bio = $3, location = $4, venue_type = $5,
                    capacity = $6, contact_person = $7, phone_number = $8, website_url = $9
                WHERE user_id = $1
                RETURNING {}
                "#,
                VENUE_COLUMNS
            ))
            .bind(profile.account_id)
            .bind(&profile.business_name)
            .bind(&profile.bio)
            .bind(&profile.location)
            .bind(profile.venue_type.as_str())
            .bind(profile.capacity)
            .bind(&profile.contact_person)
            .bind(&profile.phone_number)
            .bind(&profile.website_url)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(timed_out)?
        .map_err(|e| DomainError::storage(format!("Failed to update venue profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_venue_profile(&row)?)),
            None => Ok(None),
        }
    }
}

fn row_to_musician_profile(row: &sqlx::postgres::PgRow) -> Result<MusicianProfile, DomainError> {
    let instruments: String = row.get("instruments");
    let genres: Option<String> = row.get("genres");
    let experience_level: String = row.get("experience_level");

    Ok(MusicianProfile {
        id: row.get("id"),
        account_id: row.get("user_id"),
        name: row.get("name"),
        bio: row.get("bio"),
        location: row.get("location"),
        instruments: decode_list("instruments", &instruments)?,
        genres: genres
            .map(|g| decode_list("genres", &g))
            .transpose()?,
        experience_level: experience_level.parse()?,
        years_experience: row.get("years_experience"),
        available_for_gigs: row.get("available_for_gigs"),
        looking_for_band: row.get("looking_for_band"),
        profile_photo_url: row.get("profile_photo_url"),
        created_at: row.get("created_at"),
    })
}

fn row_to_venue_profile(row: &sqlx::postgres::PgRow) -> Result<VenueProfile, DomainError> {
    let venue_type: String = row.get("venue_type");

    Ok(VenueProfile {
        id: row.get("id"),
        account_id: row.get("user_id"),
        business_name: row.get("business_name"),
        bio: row.get("bio"),
        location: row.get("location"),
        venue_type: venue_type.parse()?,
        capacity: row.get("capacity"),
        contact_person: row.get("contact_person"),
        phone_number: row.get("phone_number"),
        website_url: row.get("website_url"),
        created_at: row.get("created_at"),
    })
}
