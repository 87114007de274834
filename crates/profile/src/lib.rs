//! # Profile Crate
//!
//! This crate holds a user's viewing profile and the operations that read
//! or change it directly.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Friend, Profile) and `create_movie`
//! - **watchlist**: Adding movies and moving them from watchlist to watched
//! - **stats**: Average rating and most watched genre
//! - **error**: Error types for profile operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{create_movie, Profile};
//!
//! let mut profile = Profile::new();
//! profile.add_to_watchlist(create_movie("Clueless", "Comedy", 8.5))?;
//! profile.watch_movie("Clueless")?;
//!
//! println!("Average rating: {:.2}", profile.average_watched_rating()?);
//! println!("Top genre: {:?}", profile.most_watched_genre()?);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod watchlist;
pub mod stats;

// Re-export commonly used types for convenience
pub use error::{ProfileError, Result};
pub use types::{create_movie, Friend, Movie, Profile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_then_stats() {
        let mut profile = Profile::new();
        profile
            .add_to_watchlist(create_movie("Clueless", "Comedy", 8.5))
            .unwrap();
        profile
            .add_to_watchlist(create_movie("Heat", "Crime", 4.5))
            .unwrap();

        profile.watch_movie("Clueless").unwrap();

        assert_eq!(profile.watchlist().unwrap().len(), 1);
        assert_eq!(profile.average_watched_rating().unwrap(), 8.5);
        assert_eq!(profile.most_watched_genre().unwrap(), Some("Comedy"));
    }

    #[test]
    fn test_profile_from_json() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "watched": [{"title": "Heat", "genre": "Crime", "rating": 4.1}],
                "friends": [{"watched": []}],
                "subscriptions": ["netflix"]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.watched().unwrap().len(), 1);
        assert_eq!(profile.friends().unwrap().len(), 1);
        assert!(profile.subscriptions().unwrap().contains("netflix"));
        assert!(profile.watchlist.is_none());
    }
}
