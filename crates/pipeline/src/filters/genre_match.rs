//! Filter to keep only movies in the user's most watched genre.

use crate::traits::Filter;
use anyhow::Result;
use profile::Movie;
use sources::WatchContext;

/// Keeps candidates whose genre equals the user's most watched genre.
///
/// ## Algorithm
/// 1. Read `most_watched_genre` from the WatchContext
/// 2. If the user has watched nothing there is no genre, drop everything
/// 3. Otherwise keep exact (case-sensitive) genre matches
pub struct GenreMatchFilter;

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let Some(genre) = context.most_watched_genre else {
            return Ok(Vec::new());
        };

        let filtered: Vec<&Movie> = candidates
            .into_iter()
            .filter(|candidate| candidate.genre() == genre)
            .collect();
        Ok(filtered)
    }
}
