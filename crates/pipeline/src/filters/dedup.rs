//! Filter to drop repeated movies.

use crate::traits::Filter;
use anyhow::Result;
use profile::Movie;
use sources::WatchContext;

/// Keeps the first occurrence of each movie, comparing by value.
///
/// `Movie` holds an `f64` so it cannot be hashed; candidate lists are
/// small, so this is a linear scan per candidate.
pub struct DedupFilter;

impl Filter for DedupFilter {
    fn name(&self) -> &str {
        "DedupFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        _context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let mut kept: Vec<&Movie> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !kept.contains(&candidate) {
                kept.push(candidate);
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile::create_movie;

    #[test]
    fn test_dedup_filter() {
        let a = create_movie("Big", "Comedy", 3.5).unwrap();
        let a_again = a.clone();
        let b = create_movie("Heat", "Crime", 4.1).unwrap();

        let filtered = DedupFilter
            .apply(vec![&a, &b, &a_again, &b], &WatchContext::new())
            .unwrap();

        assert_eq!(filtered, vec![&a, &b]);
    }
}
