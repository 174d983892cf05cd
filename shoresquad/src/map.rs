//! Map view model: tile layer settings and one marker per placeable cleanup.

use std::collections::HashMap;

use crate::models::{CleanupEvent, CleanupId, GeoCoordinate};

/// Resolves a cleanup's location text to a coordinate.
pub trait Geocoder {
    fn locate(&self, location: &str) -> Option<GeoCoordinate>;
}

/// Lookup table of known beaches, matched case-insensitively on the full
/// location string.
#[derive(Debug, Clone, Default)]
pub struct DemoGeocoder {
    places: HashMap<String, GeoCoordinate>,
}
impl DemoGeocoder {
    pub fn with_place(mut self, location: &str, coordinate: GeoCoordinate) -> Self {
        self.places.insert(location.to_lowercase(), coordinate);
        self
    }
    /// Venice, Malibu and Santa Monica.
    pub fn southern_california() -> Self {
        Self::default()
            .with_place("Venice Beach, CA", GeoCoordinate::new(34.0195, -118.4912))
            .with_place("Malibu, CA", GeoCoordinate::new(34.0280, -118.6819))
            .with_place("Santa Monica, CA", GeoCoordinate::new(34.0136, -118.4944))
    }
}
impl Geocoder for DemoGeocoder {
    fn locate(&self, location: &str) -> Option<GeoCoordinate> {
        self.places.get(&location.trim().to_lowercase()).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: GeoCoordinate,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}
impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoCoordinate::default(),
            zoom: 11,
            max_zoom: 19,
            tile_url: String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
            attribution: String::from("© OpenStreetMap contributors"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: u32,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f32,
    pub fill_opacity: f32,
}
impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 8,
            fill_color: "#0077BE",
            color: "#FFF",
            weight: 2,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cleanup: CleanupId,
    pub position: GeoCoordinate,
    pub popup: String,
    pub style: MarkerStyle,
}

/// Builds the circle markers for `cleanups`, skipping any whose location the
/// geocoder does not know.
pub fn build_markers<G: Geocoder + ?Sized>(cleanups: &[CleanupEvent], geocoder: &G) -> Vec<Marker> {
    cleanups
        .iter()
        .filter_map(|c| match geocoder.locate(&c.location) {
            Some(position) => Some(Marker {
                cleanup: c.id,
                position,
                popup: c.popup_text(),
                style: MarkerStyle::default(),
            }),
            None => {
                tracing::warn!(cleanup = %c.id, location = %c.location, "No coordinates for cleanup, skipping marker");
                None
            }
        })
        .collect()
}
