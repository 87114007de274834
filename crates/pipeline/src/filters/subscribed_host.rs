//! Filter to keep only movies the user can stream right now.

use crate::traits::Filter;
use anyhow::Result;
use profile::{Movie, ProfileError};
use sources::WatchContext;

/// Keeps candidates whose host is one of the user's subscriptions.
///
/// ## Algorithm
/// 1. Require the profile's subscriptions (error if the list is missing)
/// 2. Keep movies that have a host and whose host is subscribed
///
/// Movies without a host are never kept.
pub struct SubscribedHostFilter;

impl Filter for SubscribedHostFilter {
    fn name(&self) -> &str {
        "SubscribedHostFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let subscriptions = context
            .subscriptions
            .as_ref()
            .ok_or(ProfileError::MissingField {
                field: "subscriptions",
            })?;

        let filtered: Vec<&Movie> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .host()
                    .is_some_and(|host| subscriptions.contains(host))
            })
            .collect();
        Ok(filtered)
    }
}
