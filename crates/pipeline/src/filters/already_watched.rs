//! Filter to remove movies the user has already watched.
//!
//! This is typically the first filter in the pipeline, as there's no
//! point in recommending movies the user has already seen.

use crate::traits::Filter;
use anyhow::Result;
use profile::Movie;
use sources::WatchContext;

/// Removes candidates that appear in the user's watch history.
///
/// ## Algorithm
/// Structural comparison against `WatchContext.watched`.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let filtered: Vec<&Movie> = candidates
            .into_iter()
            .filter(|candidate| !context.watched.contains(candidate))
            .collect();
        Ok(filtered)
    }
}
