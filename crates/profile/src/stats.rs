//! Aggregate statistics over the watched list.
//!
//! Rust concepts you'll see here:
//! - Iterator `sum` / `max_by` instead of manual loops
//! - HashMap entry API for counting
//! - Returning borrowed `&str` tied to the profile's lifetime

use crate::error::Result;
use crate::types::Profile;
use std::collections::HashMap;

impl Profile {
    /// Mean rating of every watched movie, `0.0` when nothing was watched
    pub fn average_watched_rating(&self) -> Result<f64> {
        let watched = self.watched()?;
        if watched.is_empty() {
            return Ok(0.0);
        }

        let total: f64 = watched.iter().map(|movie| movie.rating()).sum();
        Ok(total / watched.len() as f64)
    }

    /// Genre that appears most often in the watched list
    ///
    /// Returns `None` when nothing was watched. On a tie the genre that
    /// appeared first in the watched list wins.
    pub fn most_watched_genre(&self) -> Result<Option<&str>> {
        let watched = self.watched()?;

        // genre -> (count, position first seen)
        let mut genre_counts: HashMap<&str, (u32, usize)> = HashMap::new();
        for (position, movie) in watched.iter().enumerate() {
            genre_counts.entry(movie.genre()).or_insert((0, position)).0 += 1;
        }

        let most_watched = genre_counts
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                // Higher count wins, then the earlier first sighting
                count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
            })
            .map(|(genre, _)| genre);

        Ok(most_watched)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ProfileError;
    use crate::types::{create_movie, Movie, Profile};

    fn movie(title: &str, genre: &str, rating: f64) -> Movie {
        create_movie(title, genre, rating).unwrap()
    }

    #[test]
    fn test_average_rating_empty() {
        let profile = Profile::new();
        assert_eq!(profile.average_watched_rating().unwrap(), 0.0);
    }

    #[test]
    fn test_average_rating() {
        let profile = Profile::new().with_watched(vec![
            movie("Alien", "Horror", 5.0),
            movie("Aliens", "Action", 7.0),
        ]);

        assert_eq!(profile.average_watched_rating().unwrap(), 6.0);
    }

    #[test]
    fn test_average_rating_fractional() {
        let profile = Profile::new().with_watched(vec![
            movie("Heat", "Crime", 4.1),
            movie("Ronin", "Action", 3.2),
            movie("Thief", "Crime", 4.6),
        ]);

        let avg = profile.average_watched_rating().unwrap();
        assert!((avg - 3.966).abs() < 0.01);
    }

    #[test]
    fn test_most_watched_genre() {
        let profile = Profile::new().with_watched(vec![
            movie("Clueless", "Comedy", 8.5),
            movie("Heat", "Drama", 4.1),
            movie("Airplane!", "Comedy", 4.0),
        ]);

        assert_eq!(profile.most_watched_genre().unwrap(), Some("Comedy"));
    }

    #[test]
    fn test_most_watched_genre_empty() {
        let profile = Profile::new();
        assert_eq!(profile.most_watched_genre().unwrap(), None);
    }

    #[test]
    fn test_most_watched_genre_tie_goes_to_first_seen() {
        let profile = Profile::new().with_watched(vec![
            movie("Heat", "Drama", 4.1),
            movie("Clueless", "Comedy", 8.5),
            movie("Airplane!", "Comedy", 4.0),
            movie("Amadeus", "Drama", 4.5),
        ]);

        // Drama and Comedy both reach two, Drama was seen first
        assert_eq!(profile.most_watched_genre().unwrap(), Some("Drama"));
    }

    #[test]
    fn test_stats_missing_watched() {
        let profile = Profile {
            watched: None,
            ..Profile::new()
        };

        let missing = ProfileError::MissingField { field: "watched" };
        assert_eq!(profile.average_watched_rating().unwrap_err(), missing);
        assert_eq!(profile.most_watched_genre().unwrap_err(), missing);
    }
}
