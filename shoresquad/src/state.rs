//! Session state of the board and the only ways it changes.

use std::collections::BTreeSet;

use crate::{
    models::{CleanupEvent, CleanupId, GeoCoordinate, UserProfile},
    Error, Result,
};

/// What a join changed, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReceipt {
    pub cleanup: CleanupId,
    pub title: String,
    pub members: u32,
    pub impact_kg: u32,
}

#[derive(Debug, Clone)]
pub struct AppState {
    user: UserProfile,
    location: GeoCoordinate,
    selected: Option<CleanupId>,
    cleanups: Vec<CleanupEvent>,
    favorites: BTreeSet<CleanupId>,
    nav_open: bool,
}
impl AppState {
    pub fn new(user: UserProfile, cleanups: Vec<CleanupEvent>) -> Self {
        Self {
            user,
            location: GeoCoordinate::default(),
            selected: None,
            cleanups,
            favorites: BTreeSet::new(),
            nav_open: false,
        }
    }
    pub fn with_location(mut self, location: GeoCoordinate) -> Self {
        self.location = location;
        self
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }
    pub fn location(&self) -> GeoCoordinate {
        self.location
    }
    pub fn cleanups(&self) -> &[CleanupEvent] {
        &self.cleanups
    }
    pub fn cleanup(&self, id: CleanupId) -> Result<&CleanupEvent> {
        self.cleanups
            .iter()
            .find(|c| c.id == id)
            .ok_or(Error::UnknownCleanup(id))
    }
    pub fn selected(&self) -> Option<&CleanupEvent> {
        self.selected.and_then(|id| self.cleanup(id).ok())
    }
    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn select(&mut self, id: CleanupId) -> Result<&CleanupEvent> {
        let index = self.index_of(id)?;
        self.selected = Some(id);
        Ok(&self.cleanups[index])
    }
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Adds the user to a cleanup: one more member on the event, one more
    /// joined cleanup and the event's impact on the user.
    pub fn join(&mut self, id: CleanupId) -> Result<JoinReceipt> {
        let index = self.index_of(id)?;
        let cleanup = &mut self.cleanups[index];
        cleanup.add_member();
        self.user.record_join(cleanup.impact_kg);
        Ok(JoinReceipt {
            cleanup: id,
            title: cleanup.title.clone(),
            members: cleanup.members,
            impact_kg: cleanup.impact_kg,
        })
    }

    pub fn set_location(&mut self, location: GeoCoordinate) {
        self.location = location;
    }

    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: CleanupId) -> Result<bool> {
        self.index_of(id)?;
        if self.favorites.remove(&id) {
            Ok(false)
        } else {
            self.favorites.insert(id);
            Ok(true)
        }
    }
    pub fn is_favorite(&self, id: CleanupId) -> bool {
        self.favorites.contains(&id)
    }
    pub fn favorites(&self) -> impl Iterator<Item = CleanupId> + '_ {
        self.favorites.iter().copied()
    }

    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Cleanups ordered by distance from the current location, nearest
    /// first, using `locate` to place each one.
    pub fn nearest<F>(&self, locate: F) -> Vec<(&CleanupEvent, f64)>
    where
        F: Fn(&CleanupEvent) -> Option<GeoCoordinate>,
    {
        let mut by_distance: Vec<_> = self
            .cleanups
            .iter()
            .filter_map(|c| locate(c).map(|at| (c, self.location.distance_km(&at))))
            .collect();
        by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));
        by_distance
    }

    fn index_of(&self, id: CleanupId) -> Result<usize> {
        self.cleanups
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::UnknownCleanup(id))
    }
}
