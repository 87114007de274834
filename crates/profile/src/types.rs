//! Core domain types for a viewing profile.
//!
//! This module defines the data structures every other crate works on.
//! Key Rust concepts demonstrated here:
//! - Private fields behind a validating constructor
//! - `#[serde(try_from = ...)]` so deserialization runs the same validation
//! - `Option<T>` fields for lists a profile may not have
//! - Builder-style methods that take and return `Self`

use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Movie
// =============================================================================

/// A movie record: title, genre, rating and an optional streaming host.
///
/// Movies are plain values. Two movies are the same movie when every field
/// matches (derived `PartialEq`), there is no separate identity.
///
/// Fields are private so the only way to get a `Movie` is through
/// [`Movie::try_new`] / [`create_movie`] or deserialization, all of which
/// reject empty titles, empty genres and zero ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MovieRecord")]
pub struct Movie {
    title: String,
    genre: String,
    rating: f64,
    /// Streaming service the movie is available on
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
}

/// Unvalidated shape of a movie as it appears in serialized data
#[derive(Deserialize)]
struct MovieRecord {
    title: String,
    genre: String,
    rating: f64,
    #[serde(default)]
    host: Option<String>,
}

impl TryFrom<MovieRecord> for Movie {
    type Error = ProfileError;

    fn try_from(record: MovieRecord) -> Result<Self> {
        let movie = Movie::try_new(record.title, record.genre, record.rating)?;
        Ok(match record.host {
            Some(host) => movie.with_host(host),
            None => movie,
        })
    }
}

impl Movie {
    /// Validate and build a movie
    ///
    /// Returns `ProfileError::InvalidMovie` if the title or genre is empty,
    /// or the rating is zero or not a finite number.
    pub fn try_new(
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
    ) -> Result<Self> {
        let title = title.into();
        let genre = genre.into();

        if title.is_empty() {
            return Err(ProfileError::InvalidMovie {
                reason: "title is empty".to_string(),
            });
        }
        if genre.is_empty() {
            return Err(ProfileError::InvalidMovie {
                reason: format!("genre is empty for '{}'", title),
            });
        }
        if rating == 0.0 || !rating.is_finite() {
            return Err(ProfileError::InvalidMovie {
                reason: format!("rating {} is not usable for '{}'", rating, title),
            });
        }

        Ok(Self {
            title,
            genre,
            rating,
            host: None,
        })
    }

    /// Attach the streaming service hosting this movie
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Streaming service, if the movie carries one
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

/// Build a movie, or `None` when any of the three inputs is empty or zero
///
/// A NaN or infinite rating is rejected as well.
///
/// Example: `create_movie("Clueless", "Comedy", 8.5)` -> `Some(movie)`
///          `create_movie("", "Comedy", 8.5)` -> `None`
pub fn create_movie(title: &str, genre: &str, rating: f64) -> Option<Movie> {
    Movie::try_new(title, genre, rating).ok()
}

// =============================================================================
// Friend
// =============================================================================

/// A friend's viewing record. Only the watch history is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub watched: Vec<Movie>,
}

impl Friend {
    pub fn new(watched: Vec<Movie>) -> Self {
        Self { watched }
    }
}

// =============================================================================
// Profile
// =============================================================================

/// One user's viewing profile, owned by the caller.
///
/// Every list is an `Option`: `None` means the profile never had that list,
/// which operations report as `ProfileError::MissingField` instead of
/// treating it as empty.
///
/// Rust concept: `#[serde(default)]` turns a missing JSON key into `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Movies the user has watched, in watch order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched: Option<Vec<Movie>>,

    /// Movies the user plans to watch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Vec<Movie>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Friend>>,

    /// Streaming services the user pays for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<HashSet<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<Movie>>,
}

impl Profile {
    /// Creates a profile with every list present and empty
    pub fn new() -> Self {
        Self {
            watched: Some(Vec::new()),
            watchlist: Some(Vec::new()),
            friends: Some(Vec::new()),
            subscriptions: Some(HashSet::new()),
            favorites: Some(Vec::new()),
        }
    }

    pub fn with_watched(mut self, movies: Vec<Movie>) -> Self {
        self.watched = Some(movies);
        self
    }

    pub fn with_watchlist(mut self, movies: Vec<Movie>) -> Self {
        self.watchlist = Some(movies);
        self
    }

    pub fn with_friends(mut self, friends: Vec<Friend>) -> Self {
        self.friends = Some(friends);
        self
    }

    pub fn with_subscriptions<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscriptions = Some(services.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_favorites(mut self, movies: Vec<Movie>) -> Self {
        self.favorites = Some(movies);
        self
    }

    // Getters - each one turns a missing list into a MissingField error
    // so callers can use `?` instead of matching on the Option

    pub fn watched(&self) -> Result<&[Movie]> {
        self.watched
            .as_deref()
            .ok_or(ProfileError::MissingField { field: "watched" })
    }

    pub fn watchlist(&self) -> Result<&[Movie]> {
        self.watchlist
            .as_deref()
            .ok_or(ProfileError::MissingField { field: "watchlist" })
    }

    pub fn friends(&self) -> Result<&[Friend]> {
        self.friends
            .as_deref()
            .ok_or(ProfileError::MissingField { field: "friends" })
    }

    pub fn subscriptions(&self) -> Result<&HashSet<String>> {
        self.subscriptions
            .as_ref()
            .ok_or(ProfileError::MissingField {
                field: "subscriptions",
            })
    }

    pub fn favorites(&self) -> Result<&[Movie]> {
        self.favorites
            .as_deref()
            .ok_or(ProfileError::MissingField { field: "favorites" })
    }
}

// Implement Default trait for convenience
impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_movie() {
        let movie = create_movie("Clueless", "Comedy", 8.5).unwrap();

        assert_eq!(movie.title(), "Clueless");
        assert_eq!(movie.genre(), "Comedy");
        assert_eq!(movie.rating(), 8.5);
        assert!(movie.host().is_none());
    }

    #[test]
    fn test_create_movie_rejects_empty_inputs() {
        assert!(create_movie("", "Comedy", 8.5).is_none());
        assert!(create_movie("Clueless", "", 8.5).is_none());
        assert!(create_movie("Clueless", "Comedy", 0.0).is_none());
    }

    #[test]
    fn test_create_movie_rejects_non_finite_rating() {
        assert!(create_movie("Clueless", "Comedy", f64::NAN).is_none());
        assert!(create_movie("Clueless", "Comedy", f64::INFINITY).is_none());
        assert!(create_movie("Clueless", "Comedy", f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_try_new_reports_reason() {
        let err = Movie::try_new("Clueless", "Comedy", f64::NAN).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidMovie { .. }));

        let err = Movie::try_new("", "Comedy", 8.5).unwrap_err();
        assert_eq!(err.to_string(), "Invalid movie: title is empty");
    }

    #[test]
    fn test_structural_equality() {
        let a = create_movie("Heat", "Crime", 4.1).unwrap();
        let b = create_movie("Heat", "Crime", 4.1).unwrap();
        assert_eq!(a, b);

        // Host is part of the record
        assert_ne!(a.clone().with_host("netflix"), b);
    }

    #[test]
    fn test_movie_json_shape() {
        let movie = create_movie("Clueless", "Comedy", 8.5).unwrap();
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"title": "Clueless", "genre": "Comedy", "rating": 8.5})
        );
    }

    #[test]
    fn test_deserialize_validates_movie() {
        let ok: Movie = serde_json::from_str(
            r#"{"title": "Heat", "genre": "Crime", "rating": 4.1, "host": "hulu"}"#,
        )
        .unwrap();
        assert_eq!(ok.host(), Some("hulu"));

        let bad = serde_json::from_str::<Movie>(r#"{"title": "", "genre": "Crime", "rating": 4.1}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_missing_keys_become_none() {
        let profile: Profile = serde_json::from_str(r#"{"watched": []}"#).unwrap();

        assert!(profile.watched().unwrap().is_empty());
        assert_eq!(
            profile.watchlist().unwrap_err(),
            ProfileError::MissingField { field: "watchlist" }
        );
        assert!(profile.friends().is_err());
        assert!(profile.subscriptions().is_err());
        assert!(profile.favorites().is_err());
    }

    #[test]
    fn test_new_profile_has_empty_lists() {
        let profile = Profile::new().with_subscriptions(["netflix", "hulu"]);

        assert!(profile.watched().unwrap().is_empty());
        assert!(profile.watchlist().unwrap().is_empty());
        assert!(profile.friends().unwrap().is_empty());
        assert!(profile.favorites().unwrap().is_empty());
        assert_eq!(profile.subscriptions().unwrap().len(), 2);
    }
}
