//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_watched;
pub mod dedup;
pub mod genre_match;
pub mod subscribed_host;
pub mod unseen_by_friends;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use dedup::DedupFilter;
pub use genre_match::GenreMatchFilter;
pub use subscribed_host::SubscribedHostFilter;
pub use unseen_by_friends::UnseenByFriendsFilter;
