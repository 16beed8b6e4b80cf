// src/filter/mod.rs
use chrono::NaiveDate;

use crate::data::{OutbreakEvent, RiskLevel};

/// Per-risk-level visibility toggles. Everything visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFilters {
    pub high: bool,
    pub medium: bool,
    pub low: bool,
}

impl Default for RiskFilters {
    fn default() -> Self {
        Self {
            high: true,
            medium: true,
            low: true,
        }
    }
}

impl RiskFilters {
    pub fn allows(&self, risk: RiskLevel) -> bool {
        match risk {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn get_mut(&mut self, risk: RiskLevel) -> &mut bool {
        match risk {
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiseaseFilter {
    #[default]
    All,
    Only(String),
}

impl DiseaseFilter {
    pub fn allows(&self, name: &str) -> bool {
        match self {
            DiseaseFilter::All => true,
            DiseaseFilter::Only(only) => only == name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DiseaseFilter::All => "All diseases",
            DiseaseFilter::Only(name) => name,
        }
    }
}

/// Inclusive calendar date range. `NaiveDate` ordering matches lexicographic
/// ISO-8601 ordering, so this is the same comparison the record strings imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filter criteria owned by a composition for its lifetime. The modal call
/// site carries no date range and leaves the timeline parked at 100.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub risk: RiskFilters,
    pub disease: DiseaseFilter,
    pub date_range: Option<DateRange>,
    /// Percentage [0, 100] of the filtered list that is visible.
    pub timeline_position: u8,
}

impl FilterState {
    /// Full-page variant: all four pipeline stages active.
    pub fn full_page(range: DateRange) -> Self {
        Self {
            risk: RiskFilters::default(),
            disease: DiseaseFilter::All,
            date_range: Some(range),
            timeline_position: 100,
        }
    }

    /// Modal variant: risk and disease stages only.
    pub fn modal() -> Self {
        Self {
            risk: RiskFilters::default(),
            disease: DiseaseFilter::All,
            date_range: None,
            timeline_position: 100,
        }
    }
}

/// Number of events the timeline window keeps out of `total`:
/// `ceil(total * position / 100)`. Zero stays zero, never a divide.
pub fn timeline_count(total: usize, position: u8) -> usize {
    let position = position.min(100) as usize;
    (total * position + 99) / 100
}

/// Stages 1-3 of the pipeline: date range, risk, disease. Pure and
/// deterministic; preserves store declaration order.
pub fn filter_events<'a>(
    events: &'a [OutbreakEvent],
    filters: &FilterState,
) -> Vec<&'a OutbreakEvent> {
    events
        .iter()
        .filter(|e| filters.date_range.map_or(true, |r| r.contains(e.date)))
        .filter(|e| filters.risk.allows(e.risk))
        .filter(|e| filters.disease.allows(&e.name))
        .collect()
}

/// Full pipeline: stages 1-3 plus the timeline window. The window takes a
/// prefix of the filtered list in declaration order; it does not re-sort by
/// date first.
pub fn visible_events<'a>(
    events: &'a [OutbreakEvent],
    filters: &FilterState,
) -> Vec<&'a OutbreakEvent> {
    let mut filtered = filter_events(events, filters);
    filtered.truncate(timeline_count(filtered.len(), filters.timeline_position));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GeoStore;

    fn store() -> GeoStore {
        GeoStore::load_embedded().unwrap()
    }

    fn full_range(store: &GeoStore) -> DateRange {
        let (start, end) = store.date_bounds().unwrap();
        DateRange { start, end }
    }

    #[test]
    fn default_filters_keep_all_twenty_in_order() {
        let store = store();
        let filters = FilterState::full_page(full_range(&store));
        let visible = visible_events(store.events(), &filters);
        assert_eq!(visible.len(), 20);
        let ids: Vec<u32> = visible.iter().map(|e| e.id).collect();
        let expected: Vec<u32> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let store = store();
        let mut filters = FilterState::full_page(full_range(&store));
        filters.risk.low = false;
        filters.timeline_position = 60;
        let once = visible_events(store.events(), &filters);
        let twice = visible_events(store.events(), &filters);
        let once_ids: Vec<u32> = once.iter().map(|e| e.id).collect();
        let twice_ids: Vec<u32> = twice.iter().map(|e| e.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn risk_filter_removes_exactly_that_level() {
        let store = store();
        let mut filters = FilterState::full_page(full_range(&store));
        filters.risk.high = false;
        let visible = visible_events(store.events(), &filters);
        assert!(visible.iter().all(|e| e.risk != crate::data::RiskLevel::High));
        let expected = store
            .events()
            .iter()
            .filter(|e| e.risk != crate::data::RiskLevel::High)
            .count();
        assert_eq!(visible.len(), expected);
    }

    #[test]
    fn disease_filter_keeps_only_named_disease() {
        let store = store();
        let mut filters = FilterState::full_page(full_range(&store));
        filters.disease = DiseaseFilter::Only("Cholera".to_string());
        let visible = visible_events(store.events(), &filters);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|e| e.name == "Cholera"));
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let store = store();
        let first = store.events()[0].date;
        let mut filters = FilterState::full_page(DateRange {
            start: first,
            end: first,
        });
        filters.timeline_position = 100;
        let visible = visible_events(store.events(), &filters);
        assert!(visible.iter().all(|e| e.date == first));
        assert!(!visible.is_empty());
    }

    #[test]
    fn timeline_is_prefix_monotonic() {
        let store = store();
        let mut filters = FilterState::full_page(full_range(&store));
        let mut previous: Vec<u32> = Vec::new();
        for position in 0..=100u8 {
            filters.timeline_position = position;
            let ids: Vec<u32> = visible_events(store.events(), &filters)
                .iter()
                .map(|e| e.id)
                .collect();
            assert!(ids.len() >= previous.len());
            assert_eq!(&ids[..previous.len()], previous.as_slice());
            previous = ids;
        }
    }

    #[test]
    fn timeline_count_rounds_up() {
        assert_eq!(timeline_count(20, 100), 20);
        assert_eq!(timeline_count(20, 50), 10);
        assert_eq!(timeline_count(20, 1), 1);
        assert_eq!(timeline_count(20, 0), 0);
        assert_eq!(timeline_count(3, 50), 2);
        assert_eq!(timeline_count(0, 100), 0);
    }

    #[test]
    fn excluding_every_risk_yields_empty_set() {
        let store = store();
        let mut filters = FilterState::full_page(full_range(&store));
        filters.risk = RiskFilters {
            high: false,
            medium: false,
            low: false,
        };
        assert!(visible_events(store.events(), &filters).is_empty());
        assert_eq!(timeline_count(0, filters.timeline_position), 0);
    }

    #[test]
    fn modal_variant_skips_date_and_timeline_stages() {
        let filters = FilterState::modal();
        assert_eq!(filters.date_range, None);
        assert_eq!(filters.timeline_position, 100);
        let store = store();
        let visible = visible_events(store.events(), &filters);
        assert_eq!(visible.len(), store.len());
    }
}
