//! Recommendation pipeline for a viewing profile.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - The three recommendation lists (available, genre, favorites)
//!
//! ## Architecture
//! Recommendations are computed in stages:
//! 1. `sources` builds a WatchContext (friend unions, most watched genre)
//! 2. Candidates are taken from the context (friends' movies or favorites)
//! 3. A FilterPipeline narrows them down
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{available_recommendations, Recommender};
//!
//! // One list
//! let available = available_recommendations(&profile)?;
//!
//! // All three lists from one context
//! let recs = Recommender::new().with_limit(10).recommend(&profile)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommendations;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommendations::{
    available_recommendations, favorite_recommendations, genre_recommendations,
    Recommendations, Recommender,
};
