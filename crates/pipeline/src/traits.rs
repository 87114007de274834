//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate movies.

use anyhow::Result;
use profile::Movie;
use sources::WatchContext;

/// Core trait for filtering candidate movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared between threads
/// - Filters take ownership of the Vec and return a filtered Vec
/// - Candidates are borrowed from a profile (`'a`), filters never clone movies
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Precomputed watch context for the user
    ///
    /// # Returns
    /// * `Ok(Vec<&Movie>)` - The candidates that passed, in input order
    /// * `Err` - If the context lacks data the filter needs
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>>;
}
