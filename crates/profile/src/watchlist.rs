//! Moving movies onto a profile's lists.
//!
//! These are the only operations that mutate a `Profile`. They take
//! `&mut self` and either apply the whole change or leave the profile
//! untouched.

use crate::error::{ProfileError, Result};
use crate::types::{Movie, Profile};
use tracing::{debug, warn};

impl Profile {
    /// Append a movie to the watched list
    ///
    /// `None` (e.g. the result of a rejected `create_movie`) is a no-op.
    /// If the profile has no watched list, a warning is logged, the profile
    /// is left as is and `MissingField` is returned.
    pub fn add_to_watched(&mut self, movie: impl Into<Option<Movie>>) -> Result<()> {
        push_movie(&mut self.watched, "watched", movie.into())
    }

    /// Append a movie to the watchlist
    ///
    /// Same rules as [`Profile::add_to_watched`].
    pub fn add_to_watchlist(&mut self, movie: impl Into<Option<Movie>>) -> Result<()> {
        push_movie(&mut self.watchlist, "watchlist", movie.into())
    }

    /// Move every watchlist movie whose title contains `title` to watched
    ///
    /// Returns how many movies were moved. An empty `title` moves nothing.
    ///
    /// ## Algorithm
    /// 1. Split the watchlist into matching and remaining movies
    /// 2. Put the remaining movies back as the new watchlist
    /// 3. Append the matches to watched, keeping watchlist order
    ///
    /// Matching is a case-sensitive substring test on the title.
    pub fn watch_movie(&mut self, title: &str) -> Result<usize> {
        if title.is_empty() {
            return Ok(0);
        }

        // Both lists must exist before anything moves
        let (watchlist, watched) = match (&mut self.watchlist, &mut self.watched) {
            (Some(watchlist), Some(watched)) => (watchlist, watched),
            (None, _) => return Err(ProfileError::MissingField { field: "watchlist" }),
            (_, None) => return Err(ProfileError::MissingField { field: "watched" }),
        };

        let (matches, remaining): (Vec<Movie>, Vec<Movie>) = std::mem::take(watchlist)
            .into_iter()
            .partition(|movie| movie.title().contains(title));

        *watchlist = remaining;
        let moved = matches.len();
        watched.extend(matches);

        debug!("Moved {} movie(s) matching '{}' to watched", moved, title);
        Ok(moved)
    }
}

fn push_movie(
    list: &mut Option<Vec<Movie>>,
    field: &'static str,
    movie: Option<Movie>,
) -> Result<()> {
    let Some(movie) = movie else {
        return Ok(());
    };

    match list {
        Some(movies) => {
            movies.push(movie);
            Ok(())
        }
        None => {
            warn!("'{}' list does not exist; could not add {}", field, movie.title());
            Err(ProfileError::MissingField { field })
        }
    }
}
