//! Filter to remove movies any friend has already watched.

use crate::traits::Filter;
use anyhow::Result;
use profile::Movie;
use sources::WatchContext;

/// Removes candidates found in `WatchContext.friends_watched`.
pub struct UnseenByFriendsFilter;

impl Filter for UnseenByFriendsFilter {
    fn name(&self) -> &str {
        "UnseenByFriendsFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let filtered: Vec<&Movie> = candidates
            .into_iter()
            .filter(|candidate| !context.friends_watched.contains(candidate))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile::create_movie;

    #[test]
    fn test_unseen_by_friends_filter() {
        let shared = create_movie("Amadeus", "Drama", 4.5).unwrap();
        let mine = create_movie("Big", "Comedy", 3.5).unwrap();

        let mut context = WatchContext::new();
        context.friends_watched = vec![&shared];

        let filtered = UnseenByFriendsFilter
            .apply(vec![&shared, &mine], &context)
            .unwrap();

        assert_eq!(filtered, vec![&mine]);
    }
}
