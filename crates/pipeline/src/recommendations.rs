//! # Recommendations
//!
//! Builds the three recommendation lists from a profile:
//! 1. **Available**: friends' movies the user hasn't seen, on a subscribed service
//! 2. **Genre**: friends' movies the user hasn't seen, in their most watched genre
//! 3. **Favorites**: the user's favorites that no friend has watched yet
//!
//! Each list is a FilterPipeline run over a WatchContext. The free functions
//! build a fresh context per call; `Recommender::recommend` builds one
//! context and reuses it for all three lists.

use anyhow::{Context, Result};
use profile::{Movie, Profile, ProfileError};
use sources::{build_watch_context, friends_watched, WatchContext};
use tracing::{debug, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    AlreadyWatchedFilter, DedupFilter, GenreMatchFilter, SubscribedHostFilter,
    UnseenByFriendsFilter,
};

/// All three recommendation lists for one profile
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations<'a> {
    pub available: Vec<&'a Movie>,
    pub genre: Vec<&'a Movie>,
    pub favorites: Vec<&'a Movie>,
}

/// Produces recommendation lists from a WatchContext
pub struct Recommender {
    available_pipeline: FilterPipeline,
    genre_pipeline: FilterPipeline,
    favorites_pipeline: FilterPipeline,

    /// Maximum movies per list (None = no limit)
    limit: Option<usize>,
}

impl Recommender {
    /// Create a recommender with the standard pipelines and no limit
    ///
    /// - available: AlreadyWatched -> SubscribedHost over friends' movies
    /// - genre: AlreadyWatched -> GenreMatch over friends' movies
    /// - favorites: Dedup -> UnseenByFriends over the user's favorites
    pub fn new() -> Self {
        Self {
            available_pipeline: FilterPipeline::new()
                .add_filter(AlreadyWatchedFilter)
                .add_filter(SubscribedHostFilter),
            genre_pipeline: FilterPipeline::new()
                .add_filter(AlreadyWatchedFilter)
                .add_filter(GenreMatchFilter),
            favorites_pipeline: FilterPipeline::new()
                .add_filter(DedupFilter)
                .add_filter(UnseenByFriendsFilter),
            limit: None,
        }
    }

    /// Cap each list at `limit` movies (default: unlimited)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Friends' movies the user hasn't seen, hosted on a subscribed service
    ///
    /// Errors if the profile has no subscriptions list.
    pub fn available<'a>(&self, context: &WatchContext<'a>) -> Result<Vec<&'a Movie>> {
        let movies = self
            .available_pipeline
            .apply(context.friends_watched.clone(), context)?;
        Ok(self.truncate(movies))
    }

    /// Friends' movies the user hasn't seen, in the user's most watched genre
    pub fn genre<'a>(&self, context: &WatchContext<'a>) -> Result<Vec<&'a Movie>> {
        let movies = self
            .genre_pipeline
            .apply(context.friends_watched.clone(), context)?;
        Ok(self.truncate(movies))
    }

    /// The user's favorites that no friend has watched
    ///
    /// Errors if the profile has no favorites list.
    pub fn favorites<'a>(&self, context: &WatchContext<'a>) -> Result<Vec<&'a Movie>> {
        let favorites = context
            .favorites
            .ok_or(ProfileError::MissingField { field: "favorites" })?;

        let movies = self
            .favorites_pipeline
            .apply(favorites.iter().collect(), context)?;
        Ok(self.truncate(movies))
    }

    /// Build one WatchContext and compute all three lists from it
    #[instrument(skip(self, profile))]
    pub fn recommend<'a>(&self, profile: &'a Profile) -> Result<Recommendations<'a>> {
        let context = build_watch_context(profile)?;

        let recommendations = Recommendations {
            available: self.available(&context).context("available recommendations")?,
            genre: self.genre(&context).context("genre recommendations")?,
            favorites: self.favorites(&context).context("favorite recommendations")?,
        };

        debug!(
            "Recommendations: {} available, {} genre, {} favorites",
            recommendations.available.len(),
            recommendations.genre.len(),
            recommendations.favorites.len()
        );
        Ok(recommendations)
    }

    fn truncate<'a>(&self, mut movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        if let Some(limit) = self.limit {
            movies.truncate(limit);
        }
        movies
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Movies only friends have watched that are on one of the user's services
pub fn available_recommendations(profile: &Profile) -> Result<Vec<&Movie>> {
    let context = build_watch_context(profile)?;
    Recommender::new().available(&context)
}

/// Movies only friends have watched, in the user's most watched genre
pub fn genre_recommendations(profile: &Profile) -> Result<Vec<&Movie>> {
    let context = build_watch_context(profile)?;
    Recommender::new().genre(&context)
}

/// The user's favorites that none of their friends have watched
///
/// Only `favorites` and `friends` are read, so the user's own watched
/// list may be missing.
pub fn favorite_recommendations(profile: &Profile) -> Result<Vec<&Movie>> {
    let mut context = WatchContext::new();
    context.friends_watched = friends_watched(profile)?;
    context.favorites = Some(profile.favorites()?);
    Recommender::new().favorites(&context)
}
