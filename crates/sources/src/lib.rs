//! # Sources Crate
//!
//! This crate works out where recommendations can come from: the movies a
//! user's friends have watched, compared against the user's own history.
//!
//! ## Components
//!
//! ### Friend set operations (`friends`)
//! - `friends_watched`: union of every friend's watch history
//! - `unique_watched`: movies only the user has seen
//! - `friends_unique_watched`: movies only friends have seen
//!
//! ### WatchContext (`watch_context`)
//! Computes the sets above, plus the user's most watched genre, once,
//! and hands them to the recommendation pipeline.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{friends_unique_watched, watch_context::build_watch_context};
//!
//! // One-off query
//! let candidates = friends_unique_watched(&profile)?;
//!
//! // Or compute everything once
//! let context = build_watch_context(&profile)?;
//! println!("{} candidates", context.friends_unique_watched.len());
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Borrowing**: results are `Vec<&Movie>` tied to the profile
//! 2. **Ordered dedup**: keeping first-seen order without a HashSet
//! 3. **Context builders**: precompute once, pass explicitly

// Public modules
pub mod types;
pub mod friends;
pub mod watch_context;

// Re-export commonly used items
pub use types::WatchContext;
pub use friends::{friends_unique_watched, friends_watched, unique_watched};
pub use watch_context::build_watch_context;

#[cfg(test)]
mod tests {
    use super::*;
    use profile::{create_movie, Friend, Profile};

    #[test]
    fn test_context_matches_free_functions() {
        let shared = create_movie("Dune", "Sci-Fi", 4.0).unwrap();
        let profile = Profile::new()
            .with_watched(vec![create_movie("Alien", "Horror", 5.0).unwrap(), shared.clone()])
            .with_friends(vec![Friend::new(vec![
                shared,
                create_movie("Brazil", "Sci-Fi", 4.5).unwrap(),
            ])]);

        let context = build_watch_context(&profile).unwrap();

        assert_eq!(context.friends_watched, friends_watched(&profile).unwrap());
        assert_eq!(context.unique_watched, unique_watched(&profile).unwrap());
        assert_eq!(
            context.friends_unique_watched,
            friends_unique_watched(&profile).unwrap()
        );
    }

    #[test]
    fn test_default_context_is_empty() {
        let context = WatchContext::default();
        assert!(context.watched.is_empty());
        assert!(context.most_watched_genre.is_none());
    }
}
