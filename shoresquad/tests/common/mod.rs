//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;
use shoresquad::{
    app::ShoreSquad,
    config::Config,
    map::{MapConfig, Marker},
    models::{seed_cleanups, CleanupEvent, CleanupId, UserProfile},
    notification::Notification,
    render::ViewRenderer,
    share::{Clipboard, NativeShare, ShareError, SharePayload},
    state::AppState,
    weather::WeatherReading,
};

/// One call made on the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Markers(Vec<CleanupId>),
    Cleanups(Vec<CleanupId>),
    Weather(CleanupId, Option<WeatherReading>),
    Dashboard { joined: u32, impact_kg: u32, crew: u32 },
    Highlight(CleanupId),
    /// Messages of the banners on screen, oldest first.
    Notifications(Vec<String>),
    Nav(bool),
}

/// View double that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<Rendered>,
}
impl RecordingView {
    pub fn take(&mut self) -> Vec<Rendered> {
        std::mem::take(&mut self.calls)
    }
    pub fn last_list(&self) -> Option<Vec<CleanupId>> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Cleanups(ids) => Some(ids.clone()),
            _ => None,
        })
    }
}
impl ViewRenderer for RecordingView {
    fn render_markers(&mut self, _config: &MapConfig, markers: &[Marker]) {
        self.calls
            .push(Rendered::Markers(markers.iter().map(|m| m.cleanup).collect()));
    }
    fn render_cleanups(&mut self, cleanups: &[&CleanupEvent]) {
        self.calls
            .push(Rendered::Cleanups(cleanups.iter().map(|c| c.id).collect()));
    }
    fn render_weather(&mut self, cleanup: &CleanupEvent, weather: Option<&WeatherReading>) {
        self.calls
            .push(Rendered::Weather(cleanup.id, weather.cloned()));
    }
    fn render_dashboard(&mut self, user: &UserProfile) {
        self.calls.push(Rendered::Dashboard {
            joined: user.cleanups_joined,
            impact_kg: user.total_impact_kg,
            crew: user.crew_members,
        });
    }
    fn highlight_cleanup(&mut self, id: CleanupId) {
        self.calls.push(Rendered::Highlight(id));
    }
    fn render_notifications(&mut self, active: &[Notification]) {
        self.calls.push(Rendered::Notifications(
            active.iter().map(|n| n.message.clone()).collect(),
        ));
    }
    fn render_nav(&mut self, open: bool) {
        self.calls.push(Rendered::Nav(open));
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn seeded_state() -> AppState {
    AppState::new(
        UserProfile::default(),
        seed_cleanups().expect("Seed cleanups should load"),
    )
}

/// A board over the seed data, with "today" fixed to 2025-03-20.
pub fn board() -> ShoreSquad<RecordingView> {
    ShoreSquad::with_mocks(seeded_state(), RecordingView::default(), Config::default())
        .with_today(day(2025, 3, 20))
}

/// Clipboard that remembers what it was given.
#[derive(Clone, Default)]
pub struct MemoryClipboard(pub Rc<RefCell<Vec<String>>>);
impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

pub struct DeniedClipboard;
impl Clipboard for DeniedClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Clipboard("NotAllowedError".into()))
    }
}

/// Native share sheet that records payloads.
#[derive(Clone, Default)]
pub struct RecordingShare(pub Rc<RefCell<Vec<SharePayload>>>);
impl NativeShare for RecordingShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        self.0.borrow_mut().push(payload.clone());
        Ok(())
    }
}
