//! Rendering seam between the board state and whatever displays it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use maud::{html, Markup, DOCTYPE};

use crate::{
    map::{MapConfig, Marker},
    models::{CleanupEvent, CleanupId, UserProfile},
    notification::Notification,
    weather::WeatherReading,
};

pub const MAP: &str = "map";
pub const CLEANUPS_LIST: &str = "cleanupsList";
pub const WEATHER: &str = "weatherContainer";
pub const CLEANUP_COUNT: &str = "cleanupCount";
pub const IMPACT_KG: &str = "impactKg";
pub const CREW_COUNT: &str = "crewCount";
pub const NAV_MENU: &str = "navMenu";
pub const NOTIFICATIONS: &str = "notifications";

const HIGHLIGHT_BORDER: &str = "border-left: 4px solid #FF6B6B;";
const PLAIN_BORDER: &str = "border-left: 4px solid #ECF0F1;";

/// Short weekday, month and day, e.g. `Sat, Mar 15`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Everything the controller asks a view to draw.
pub trait ViewRenderer {
    fn render_markers(&mut self, config: &MapConfig, markers: &[Marker]);
    /// An empty slice means nothing matched and a placeholder is shown.
    fn render_cleanups(&mut self, cleanups: &[&CleanupEvent]);
    /// `None` when no reading could be fetched.
    fn render_weather(&mut self, cleanup: &CleanupEvent, weather: Option<&WeatherReading>);
    fn render_dashboard(&mut self, user: &UserProfile);
    fn highlight_cleanup(&mut self, id: CleanupId);
    /// Draws the banners currently on screen, oldest first. Called whenever
    /// one is shown or dismissed.
    fn render_notifications(&mut self, active: &[Notification]);
    fn render_nav(&mut self, open: bool);
}

/// Renders each page region to an HTML fragment keyed by element id.
#[derive(Debug, Default)]
pub struct HtmlView {
    regions: BTreeMap<&'static str, String>,
    cards: Vec<CleanupEvent>,
    highlighted: Option<CleanupId>,
    nav_open: bool,
}
impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner HTML of the element with `id`, if it was rendered.
    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    pub fn highlighted(&self) -> Option<CleanupId> {
        self.highlighted
    }

    /// The whole page with every rendered region in place.
    pub fn document(&self) -> Markup {
        let region = |id: &str| maud::PreEscaped(self.region(id).unwrap_or_default().to_string());
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "ShoreSquad" }
                }
                body {
                    header {
                        button id="menuToggle" aria-expanded=(self.nav_open.to_string()) aria-controls=(NAV_MENU) { "☰" }
                        nav id=(NAV_MENU) { (region(NAV_MENU)) }
                    }
                    section class="map-section" {
                        div id=(MAP) { (region(MAP)) }
                        div id=(WEATHER) { (region(WEATHER)) }
                    }
                    section class="impact" {
                        span id=(CLEANUP_COUNT) { (region(CLEANUP_COUNT)) }
                        span id=(IMPACT_KG) { (region(IMPACT_KG)) }
                        span id=(CREW_COUNT) { (region(CREW_COUNT)) }
                    }
                    section class="cleanups" {
                        input id="searchInput" type="search" placeholder="Search cleanups";
                        select id="dateFilter" {
                            option value="all" { "All dates" }
                            option value="today" { "Today" }
                            option value="week" { "This week" }
                            option value="month" { "This month" }
                        }
                        ul id=(CLEANUPS_LIST) role="list" { (region(CLEANUPS_LIST)) }
                    }
                    div id=(NOTIFICATIONS) { (region(NOTIFICATIONS)) }
                }
            }
        }
    }

    fn rebuild_list(&mut self) {
        let markup = if self.cards.is_empty() {
            html! { p class="placeholder" { "No cleanups found." } }
        } else {
            html! {
                @for cleanup in &self.cards {
                    (cleanup_card(cleanup, self.highlighted == Some(cleanup.id)))
                }
            }
        };
        self.regions.insert(CLEANUPS_LIST, markup.into_string());
    }
}
impl ViewRenderer for HtmlView {
    fn render_markers(&mut self, config: &MapConfig, markers: &[Marker]) {
        let markup = html! {
            div class="map-tiles" data-url=(config.tile_url) data-zoom=(config.zoom)
                data-max-zoom=(config.max_zoom) data-center=(format!("{},{}", config.center.lat, config.center.lng))
            {
                small class="attribution" { (config.attribution) }
            }
            @for marker in markers {
                div class="circle-marker"
                    data-cleanup=(marker.cleanup.0)
                    data-lat=(marker.position.lat)
                    data-lng=(marker.position.lng)
                    data-radius=(marker.style.radius)
                    data-opacity=(marker.style.opacity)
                    data-fill-opacity=(marker.style.fill_opacity)
                    style=(format!("background: {}; border: {}px solid {}; opacity: {};",
                        marker.style.fill_color, marker.style.weight, marker.style.color, marker.style.fill_opacity))
                {
                    div class="popup" style="padding: 8px;" {
                        @for (i, line) in marker.popup.lines().enumerate() {
                            @if i == 0 { strong { (line) } } @else { br; (line) }
                        }
                    }
                }
            }
        };
        self.regions.insert(MAP, markup.into_string());
    }

    fn render_cleanups(&mut self, cleanups: &[&CleanupEvent]) {
        self.cards = cleanups.iter().map(|c| (*c).clone()).collect();
        self.rebuild_list();
    }

    fn render_weather(&mut self, cleanup: &CleanupEvent, weather: Option<&WeatherReading>) {
        let markup = html! {
            div class="weather-card" {
                h3 { (cleanup.location) }
                @match weather {
                    Some(w) => {
                        div class="weather-emoji" { (w.emoji()) }
                        div class="weather-temp" { (w.temperature_c) "°C" }
                        p { (w.condition) }
                        small { "💧 " (w.humidity_pct) "% | 🌬️ " (w.wind_kmh) " km/h" }
                    },
                    None => p class="placeholder" { "Weather unavailable." },
                }
            }
        };
        self.regions.insert(WEATHER, markup.into_string());
    }

    fn render_dashboard(&mut self, user: &UserProfile) {
        self.regions.insert(CLEANUP_COUNT, user.cleanups_joined.to_string());
        self.regions.insert(IMPACT_KG, user.total_impact_kg.to_string());
        self.regions.insert(CREW_COUNT, user.crew_members.to_string());
    }

    fn highlight_cleanup(&mut self, id: CleanupId) {
        self.highlighted = Some(id);
        self.rebuild_list();
    }

    fn render_notifications(&mut self, active: &[Notification]) {
        let markup = html! {
            @for n in active {
                div class=(format!("{} notification", n.kind.class()))
                    style=(format!("position: fixed; bottom: 20px; right: 20px; padding: 12px 20px; background: {}; color: white; border-radius: 8px; z-index: 1000;", n.kind.color()))
                { (n.message) }
            }
        };
        self.regions.insert(NOTIFICATIONS, markup.into_string());
    }

    fn render_nav(&mut self, open: bool) {
        self.nav_open = open;
        let class = if open { "nav-menu active" } else { "nav-menu" };
        let markup = html! {
            ul class=(class) {
                li { a href="#map" { "Map" } }
                li { a href="#cleanups" { "Cleanups" } }
                li { a href="#impact" { "Impact" } }
            }
        };
        self.regions.insert(NAV_MENU, markup.into_string());
    }
}

fn cleanup_card(cleanup: &CleanupEvent, highlighted: bool) -> Markup {
    html! {
        li class="cleanup-card" id=(cleanup.id.card_id()) role="listitem"
            style=(if highlighted { HIGHLIGHT_BORDER } else { PLAIN_BORDER })
        {
            div class="cleanup-header" {
                h3 class="cleanup-title" { (cleanup.icon) " " (cleanup.title) }
                span class="cleanup-badge" { (cleanup.members) " joining" }
            }
            div class="cleanup-details" {
                div class="cleanup-detail-item" { span { "📍" } " " strong { (cleanup.location) } }
                div class="cleanup-detail-item" { span { "📅" } " " strong { (format_date(cleanup.date)) } }
                div class="cleanup-detail-item" { span { "⏰" } " " strong { (cleanup.time) } }
                div class="cleanup-detail-item" { span { "👥" } " " strong { (cleanup.crew) } }
            }
            p class="cleanup-description" { (cleanup.description) }
            div class="cleanup-actions" {
                button class="btn btn-primary" data-action="join" data-cleanup=(cleanup.id.0)
                    aria-label="Join this cleanup" { "✓ Join Cleanup" }
                button class="btn btn-secondary" data-action="share" data-cleanup=(cleanup.id.0)
                    aria-label="Share this cleanup" { "🔗 Share" }
            }
        }
    }
}
