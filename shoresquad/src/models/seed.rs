use std::collections::HashSet;

use super::CleanupEvent;
use crate::{Error, Result};

const SEED_CLEANUPS: &str = include_str!("../../data/cleanups.ron");

/// The demo cleanups the board starts with.
pub fn seed_cleanups() -> Result<Vec<CleanupEvent>> {
    parse_cleanups(SEED_CLEANUPS)
}

/// Parses a RON list of cleanups, rejecting repeated ids.
pub fn parse_cleanups(source: &str) -> Result<Vec<CleanupEvent>> {
    let cleanups: Vec<CleanupEvent> = ron::from_str(source)?;
    let mut seen = HashSet::new();
    for c in cleanups.iter() {
        if !seen.insert(c.id) {
            return Err(Error::DuplicateCleanup(c.id));
        }
    }
    tracing::debug!(count = cleanups.len(), "Loaded cleanups");
    Ok(cleanups)
}
