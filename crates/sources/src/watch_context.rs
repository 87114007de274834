//! Helper functions to build a WatchContext from a Profile
//!
//! This module gathers every derived set recommendation code needs
//! into one `WatchContext`, so it is computed once and then passed
//! around explicitly.

use crate::friends::{difference, friends_watched};
use crate::types::WatchContext;
use anyhow::{Context, Result};
use profile::Profile;
use tracing::{debug, instrument};

/// Build a WatchContext for a profile
///
/// This function aggregates:
/// - The user's watched movies
/// - Friends' watched movies (deduplicated union)
/// - Movies only the user has seen, and movies only friends have seen
/// - Most watched genre and average rating
/// - Subscriptions and favorites, when the profile has them
///
/// `watched` and `friends` are required. A missing `subscriptions` or
/// `favorites` list is kept as `None` and only becomes an error for the
/// code that actually reads it.
///
/// ## Learning Note
/// This is the "context builder" pattern:
/// - Gather data once upfront
/// - Avoid recomputing the friend union for every recommendation list
#[instrument(skip(profile))]
pub fn build_watch_context(profile: &Profile) -> Result<WatchContext<'_>> {
    let watched = profile.watched().context("Cannot build watch context")?;
    let friends_watched = friends_watched(profile).context("Cannot build watch context")?;

    let mut context = WatchContext::new();
    context.watched = watched.iter().collect();
    context.unique_watched = difference(watched.iter(), &friends_watched);
    context.friends_unique_watched = difference(friends_watched.iter().copied(), &context.watched);
    context.friends_watched = friends_watched;

    // Cannot fail past this point: watched is present
    context.most_watched_genre = profile.most_watched_genre()?;
    context.average_rating = profile.average_watched_rating()?;

    context.subscriptions = profile
        .subscriptions
        .as_ref()
        .map(|services| services.iter().map(String::as_str).collect());
    context.favorites = profile.favorites.as_deref();

    debug!(
        "Built watch context (watched: {}, friends watched: {}, friends unique: {})",
        context.watched.len(),
        context.friends_watched.len(),
        context.friends_unique_watched.len()
    );

    Ok(context)
}
