use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CleanupId;

/// A scheduled beach cleanup.
///
/// `members` only ever grows during a session, see
/// [`CleanupEvent::add_member`]. `impact_kg` is the event's fixed debris
/// estimate; joining credits it to the user, not back to the event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CleanupEvent {
    pub id: CleanupId,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    /// Start time as shown to the user, e.g. `09:00`.
    pub time: String,
    pub description: String,
    pub crew: String,
    pub members: u32,
    pub impact_kg: u32,
    pub icon: String,
}
impl CleanupEvent {
    pub fn add_member(&mut self) {
        self.members = self.members.saturating_add(1);
    }

    /// Case-insensitive substring match over title, location and crew.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.location, &self.crew]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Popup text shown on the map marker.
    pub fn popup_text(&self) -> String {
        format!(
            "{}\n📍 {}\n👥 {} joining",
            self.title, self.location, self.members
        )
    }
}

#[derive(Debug)]
pub struct CleanupBuilder {
    id: CleanupId,
    title: String,
    location: String,
    date: NaiveDate,
    time: String,
    description: String,
    crew: String,
    members: u32,
    impact_kg: u32,
    icon: String,
}
impl CleanupBuilder {
    pub fn new(id: CleanupId, title: &str, location: &str, date: NaiveDate) -> Self {
        Self {
            id,
            title: String::from(title),
            location: String::from(location),
            date,
            time: String::new(),
            description: String::new(),
            crew: String::new(),
            members: 0,
            impact_kg: 0,
            icon: String::from("🌊"),
        }
    }
    pub fn time(mut self, time: &str) -> Self {
        self.time = String::from(time);
        self
    }
    pub fn description(mut self, desc: &str) -> Self {
        self.description = String::from(desc);
        self
    }
    pub fn crew(mut self, crew: &str) -> Self {
        self.crew = String::from(crew);
        self
    }
    pub fn members(mut self, members: u32) -> Self {
        self.members = members;
        self
    }
    pub fn impact_kg(mut self, impact_kg: u32) -> Self {
        self.impact_kg = impact_kg;
        self
    }
    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = String::from(icon);
        self
    }
    pub fn build(self) -> CleanupEvent {
        CleanupEvent {
            id: self.id,
            title: self.title,
            location: self.location,
            date: self.date,
            time: self.time,
            description: self.description,
            crew: self.crew,
            members: self.members,
            impact_kg: self.impact_kg,
            icon: self.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pier() -> CleanupEvent {
        CleanupBuilder::new(
            CleanupId(3),
            "Santa Monica Pier Cleanup",
            "Santa Monica, CA",
            NaiveDate::from_ymd_opt(2025, 3, 29).unwrap(),
        )
        .crew("Ocean Lovers")
        .members(25)
        .impact_kg(78)
        .build()
    }

    #[test]
    fn matches_title_location_and_crew() {
        let pier = pier();
        assert!(pier.matches("pier"));
        assert!(pier.matches("santa monica, ca"));
        assert!(pier.matches("ocean"));
        assert!(pier.matches(""));
        assert!(!pier.matches("malibu"));
    }

    #[test]
    fn add_member_increments_by_one() {
        let mut pier = pier();
        pier.add_member();
        assert_eq!(pier.members, 26);
        assert_eq!(pier.impact_kg, 78);
    }

    #[test]
    fn popup_mentions_member_count() {
        assert!(pier().popup_text().ends_with("👥 25 joining"));
    }
}
