use serde::{Deserialize, Serialize};

use super::UserId;

/// The person browsing the board, with their running totals.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub crew: String,
    pub cleanups_joined: u32,
    pub total_impact_kg: u32,
    pub crew_members: u32,
}
impl UserProfile {
    pub fn new(id: &str, name: &str, crew: &str) -> Self {
        Self {
            id: UserId(String::from(id)),
            name: String::from(name),
            crew: String::from(crew),
            cleanups_joined: 0,
            total_impact_kg: 0,
            crew_members: 0,
        }
    }
    /// Records one joined cleanup worth `impact_kg`.
    pub fn record_join(&mut self, impact_kg: u32) {
        self.cleanups_joined = self.cleanups_joined.saturating_add(1);
        self.total_impact_kg = self.total_impact_kg.saturating_add(impact_kg);
    }
}
impl Default for UserProfile {
    fn default() -> Self {
        Self {
            cleanups_joined: 3,
            total_impact_kg: 125,
            crew_members: 8,
            ..Self::new("user123", "Alex", "Eco Warriors")
        }
    }
}
impl PartialEq for UserProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for UserProfile {}
