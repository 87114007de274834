//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use profile::Movie;
use sources::WatchContext;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyWatchedFilter)
///     .add_filter(SubscribedHostFilter);
///
/// let available = pipeline.apply(context.friends_watched.clone(), &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// # Returns
    /// * `Ok(Vec<&Movie>)` - The candidates left after all filters
    /// * `Err` - If any filter fails
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a Movie>,
        context: &WatchContext<'_>,
    ) -> Result<Vec<&'a Movie>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{AlreadyWatchedFilter, DedupFilter};
    use profile::create_movie;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let context = WatchContext::new();

        let a = create_movie("Heat", "Crime", 4.1).unwrap();
        let b = create_movie("Big", "Comedy", 3.5).unwrap();

        let filtered = pipeline.apply(vec![&a, &b], &context).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filters_run_in_order() {
        let a = create_movie("Heat", "Crime", 4.1).unwrap();
        let b = create_movie("Big", "Comedy", 3.5).unwrap();

        let mut context = WatchContext::new();
        context.watched = vec![&a];

        let pipeline = FilterPipeline::new()
            .add_filter(DedupFilter)
            .add_filter(AlreadyWatchedFilter);

        assert_eq!(
            pipeline.filter_names(),
            vec!["DedupFilter", "AlreadyWatchedFilter"]
        );

        let filtered = pipeline.apply(vec![&a, &b, &b], &context).unwrap();
        assert_eq!(filtered, vec![&b]);
    }
}
