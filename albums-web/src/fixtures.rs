//! Seed data for the listing
//!
//! Stands in for the albums query the listing is normally handed.

use albums_core::{Album, AlbumsQuery};
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/albums.json");

/// Albums to seed the listing with. A broken fixture seeds nothing.
pub fn initial_albums() -> Vec<Album> {
    match serde_json::from_str::<AlbumsQuery>(FIXTURE_JSON) {
        Ok(query) => query.into_albums(),
        Err(e) => {
            error!("Failed to parse album fixtures: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses() {
        let albums = initial_albums();
        assert!(!albums.is_empty());
        assert!(albums.iter().all(|a| !a.title.is_empty()));
    }
}
