//! Set operations between a user's watch history and their friends'.
//!
//! Every function returns borrowed movies in first-seen order with
//! duplicates removed. Duplicates are decided by structural equality
//! (`Movie: PartialEq`), so two records with the same title but a
//! different rating are different movies.
//!
//! ## Learning Goals
//! - Returning `Vec<&Movie>` that borrows from the profile instead of cloning
//! - Order-preserving dedup with a linear `contains` check
//! - `?` to surface a missing list as an error

use profile::{Movie, Profile, Result};

/// Every movie any friend has watched, deduplicated
///
/// Friends are visited in listed order, and each friend's history in watch
/// order, so the result is in first-seen order.
pub fn friends_watched(profile: &Profile) -> Result<Vec<&Movie>> {
    let mut movies = Vec::new();
    for friend in profile.friends()? {
        for movie in &friend.watched {
            push_unique(&mut movies, movie);
        }
    }
    Ok(movies)
}

/// Movies the user watched that no friend has watched
pub fn unique_watched(profile: &Profile) -> Result<Vec<&Movie>> {
    let watched = profile.watched()?;
    let friends = friends_watched(profile)?;
    Ok(difference(watched.iter(), &friends))
}

/// Movies at least one friend watched that the user has not
pub fn friends_unique_watched(profile: &Profile) -> Result<Vec<&Movie>> {
    let watched = profile.watched()?;
    let friends = friends_watched(profile)?;
    let seen: Vec<&Movie> = watched.iter().collect();
    Ok(difference(friends, &seen))
}

/// Items of `movies` not in `exclude`, deduplicated, order preserved
pub(crate) fn difference<'a>(
    movies: impl IntoIterator<Item = &'a Movie>,
    exclude: &[&Movie],
) -> Vec<&'a Movie> {
    let mut kept = Vec::new();
    for movie in movies {
        if !exclude.contains(&movie) {
            push_unique(&mut kept, movie);
        }
    }
    kept
}

fn push_unique<'a>(movies: &mut Vec<&'a Movie>, movie: &'a Movie) {
    if !movies.contains(&movie) {
        movies.push(movie);
    }
}
