//! Example: Recommendations for a small viewing party
//!
//! Run with: cargo run --package pipeline --example viewing_party
//!
//! This example shows how to:
//! 1. Load a profile from JSON
//! 2. Move a movie from the watchlist to watched
//! 3. Print watch statistics
//! 4. Compute all three recommendation lists from one WatchContext
//!
//! Set RUST_LOG=debug to see the filter pipeline at work.

use anyhow::Context;
use pipeline::Recommender;
use profile::{create_movie, Movie, Profile};
use sources::build_watch_context;

const PROFILE_JSON: &str = r#"{
    "watched": [
        {"title": "Clueless", "genre": "Comedy", "rating": 4.5, "host": "netflix"},
        {"title": "Heat", "genre": "Crime", "rating": 4.1, "host": "hulu"}
    ],
    "watchlist": [
        {"title": "Airplane!", "genre": "Comedy", "rating": 4.0, "host": "netflix"}
    ],
    "friends": [
        {"watched": [
            {"title": "Heat", "genre": "Crime", "rating": 4.1, "host": "hulu"},
            {"title": "Big", "genre": "Comedy", "rating": 3.5, "host": "netflix"}
        ]},
        {"watched": [
            {"title": "Tootsie", "genre": "Comedy", "rating": 3.9, "host": "amazon"},
            {"title": "Thief", "genre": "Crime", "rating": 4.6, "host": "hulu"}
        ]}
    ],
    "subscriptions": ["netflix", "hulu"],
    "favorites": [
        {"title": "Clueless", "genre": "Comedy", "rating": 4.5, "host": "netflix"}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Viewing Party Example ===\n");

    let mut profile: Profile =
        serde_json::from_str(PROFILE_JSON).context("Failed to parse profile JSON")?;

    // Rejected movies are silently skipped
    profile.add_to_watchlist(create_movie("", "Comedy", 4.0))?;
    profile.add_to_watchlist(create_movie("Tootsie", "Comedy", 3.9))?;

    let moved = profile.watch_movie("Airplane")?;
    println!("Watched {} movie(s) from the watchlist", moved);
    println!("  Watchlist now: {}", join_titles(profile.watchlist()?.iter()));
    println!();

    let context = build_watch_context(&profile)?;
    println!("Statistics:");
    println!("  Average rating: {:.2}", context.average_rating);
    if let Some(genre) = context.most_watched_genre {
        println!("  Most watched genre: {}", genre);
    }
    println!();

    println!("Friends:");
    println!("  Watched by friends: {}", join_titles(context.friends_watched.iter().copied()));
    println!("  Only you watched: {}", join_titles(context.unique_watched.iter().copied()));
    println!(
        "  Only friends watched: {}",
        join_titles(context.friends_unique_watched.iter().copied())
    );
    println!();

    let recommender = Recommender::new().with_limit(5);
    println!("Recommendations:");
    println!(
        "  On your services: {}",
        join_titles(recommender.available(&context)?.into_iter())
    );
    println!(
        "  In your favorite genre: {}",
        join_titles(recommender.genre(&context)?.into_iter())
    );
    println!(
        "  Favorites to share: {}",
        join_titles(recommender.favorites(&context)?.into_iter())
    );

    Ok(())
}

fn join_titles<'a>(movies: impl Iterator<Item = &'a Movie>) -> String {
    let titles: Vec<&str> = movies.map(|movie| movie.title()).collect();
    if titles.is_empty() {
        "(none)".to_string()
    } else {
        titles.join(", ")
    }
}
