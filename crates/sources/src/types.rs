//! Shared types for the sources crate.

use profile::Movie;
use std::collections::HashSet;

/// Everything derived from a profile that recommendation code needs,
/// computed once by [`crate::watch_context::build_watch_context`].
///
/// All movies are borrowed from the profile the context was built from,
/// so the profile cannot change while a context is alive.
#[derive(Debug, Clone)]
pub struct WatchContext<'a> {
    /// The user's own watch history, in watch order
    pub watched: Vec<&'a Movie>,

    /// Union of all friends' histories
    pub friends_watched: Vec<&'a Movie>,

    /// Watched by the user, not by any friend
    pub unique_watched: Vec<&'a Movie>,

    /// Watched by a friend, not by the user
    pub friends_unique_watched: Vec<&'a Movie>,

    /// Most frequent genre in `watched` (None if nothing watched)
    pub most_watched_genre: Option<&'a str>,

    /// Mean rating over `watched`
    pub average_rating: f64,

    /// Services the user subscribes to, if the profile lists them
    pub subscriptions: Option<HashSet<&'a str>>,

    /// The user's favorites, if the profile lists them
    pub favorites: Option<&'a [Movie]>,
}

impl<'a> WatchContext<'a> {
    /// Create an empty context (nothing watched, no friends)
    pub fn new() -> Self {
        Self {
            watched: Vec::new(),
            friends_watched: Vec::new(),
            unique_watched: Vec::new(),
            friends_unique_watched: Vec::new(),
            most_watched_genre: None,
            average_rating: 0.0,
            subscriptions: None,
            favorites: None,
        }
    }
}

impl Default for WatchContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
