// src/data/mod.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Base marker diameter in pixels when the dataset omits `size`.
pub const DEFAULT_MARKER_SIZE: f32 = 12.0;

fn default_marker_size() -> f32 {
    DEFAULT_MARKER_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Fixed 3-entry palette. Marker color is always derived from the risk
    /// level, never stored alongside the event.
    pub fn color(self) -> Color32 {
        match self {
            RiskLevel::High => Color32::from_rgb(220, 53, 69),
            RiskLevel::Medium => Color32::from_rgb(255, 165, 0),
            RiskLevel::Low => Color32::from_rgb(40, 167, 69),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// One geotagged, dated disease-event record. Immutable for the lifetime of
/// the session; the store is deserialized once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutbreakEvent {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub risk: RiskLevel,
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_marker_size")]
    pub size: f32,
    #[serde(default)]
    pub pulse: bool,
    pub summary: String,
}

impl OutbreakEvent {
    pub fn color(&self) -> Color32 {
        self.risk.color()
    }
}

/// In-memory store of outbreak records. Declaration order in the dataset is
/// load-bearing: the timeline window slices it without re-sorting.
#[derive(Debug)]
pub struct GeoStore {
    events: Vec<OutbreakEvent>,
}

impl GeoStore {
    pub fn load_embedded() -> Result<Self> {
        Self::from_ron(include_str!("outbreaks.ron"))
    }

    pub fn from_ron(source: &str) -> Result<Self> {
        let events: Vec<OutbreakEvent> =
            ron::from_str(source).context("Failed to parse outbreak dataset")?;
        Ok(Self { events })
    }

    pub fn events(&self) -> &[OutbreakEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn get(&self, id: u32) -> Option<&OutbreakEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Distinct disease names in order of first appearance, for the disease
    /// filter dropdown.
    pub fn disease_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for event in &self.events {
            if !names.iter().any(|n| n == &event.name) {
                names.push(event.name.clone());
            }
        }
        names
    }

    /// Earliest and latest record dates, used to seed the date-range filter.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.events.iter().map(|e| e.date).min()?;
        let max = self.events.iter().map(|e| e.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_dataset_loads_twenty_events() {
        let store = GeoStore::load_embedded().unwrap();
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn event_ids_are_unique() {
        let store = GeoStore::load_embedded().unwrap();
        let ids: HashSet<u32> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn coordinates_are_in_range() {
        let store = GeoStore::load_embedded().unwrap();
        for event in store.events() {
            assert!(
                (-90.0..=90.0).contains(&event.lat),
                "event {} latitude out of range",
                event.id
            );
            assert!(
                (-180.0..=180.0).contains(&event.lng),
                "event {} longitude out of range",
                event.id
            );
        }
    }

    #[test]
    fn marker_color_follows_risk_palette() {
        let store = GeoStore::load_embedded().unwrap();
        for event in store.events() {
            assert_eq!(event.color(), event.risk.color());
        }
    }

    #[test]
    fn omitted_size_defaults() {
        let store = GeoStore::from_ron(
            r#"[(
                id: 1,
                name: "Cholera",
                location: "Test City",
                date: "2026-01-01",
                risk: Low,
                lat: 0.0,
                lng: 0.0,
                summary: "test",
            )]"#,
        )
        .unwrap();
        assert_eq!(store.events()[0].size, DEFAULT_MARKER_SIZE);
        assert!(!store.events()[0].pulse);
    }

    #[test]
    fn lookup_by_id() {
        let store = GeoStore::load_embedded().unwrap();
        let first = &store.events()[0];
        assert_eq!(store.get(first.id).unwrap().id, first.id);
        assert!(store.get(9999).is_none());
    }
}
