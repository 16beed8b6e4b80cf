// src/state/mod.rs
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{GeoStore, OutbreakEvent};
use crate::filter::{DateRange, FilterState};
use crate::map::MapView;
use crate::selection::SelectionSync;
use crate::window_state::{WindowMode, WindowStateMachine};

/// Delay before the closed modal's window mode snaps back to its initial
/// state, so the reset is not visible during the close animation.
pub const CLOSE_RESET_DELAY: Duration = Duration::from_millis(300);

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Overview,
    OutbreakMap,
}

/// Full-page visualization screen. Persistent layout: no window machine,
/// full filter state including date range and timeline.
pub struct MapPageState {
    pub filters: FilterState,
    pub selection: SelectionSync,
    pub map: Option<MapView>,
    // Text buffers behind the date-range fields; applied once they parse.
    pub start_buf: String,
    pub end_buf: String,
}

impl MapPageState {
    fn new(range: DateRange) -> Self {
        Self {
            filters: FilterState::full_page(range),
            selection: SelectionSync::new(),
            map: None,
            start_buf: range.start.to_string(),
            end_buf: range.end.to_string(),
        }
    }
}

/// Modal "Map View" overlay. Filters persist across opens within a session;
/// selection and window mode reset on every open.
pub struct MapModalState {
    pub open: bool,
    pub filters: FilterState,
    pub selection: SelectionSync,
    pub window: WindowStateMachine,
    pub map: Option<MapView>,
    pending_window_reset: Option<Instant>,
}

impl MapModalState {
    fn new() -> Self {
        Self {
            open: false,
            filters: FilterState::modal(),
            selection: SelectionSync::new(),
            window: WindowStateMachine::new(WindowMode::Normal),
            map: None,
            pending_window_reset: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selection.forget();
        self.window.reopen();
        self.pending_window_reset = None;
    }

    /// Open with a pre-selected event (the overview's recent-events list
    /// hands events over directly, bypassing the modal's filters).
    pub fn open_with_selection(&mut self, event: &OutbreakEvent, now: Instant) {
        self.open();
        self.selection.select_from_list(event, now);
    }

    /// Close tears the map down (dropping it releases the tile layer),
    /// cancels deferred work, and schedules the delayed window-mode reset.
    pub fn close(&mut self, now: Instant) {
        self.open = false;
        self.selection.forget();
        self.map = None;
        self.pending_window_reset = Some(now + CLOSE_RESET_DELAY);
    }

    /// Frame-driven follow-up for the deferred close reset.
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.pending_window_reset {
            if now >= due {
                self.window.reopen();
                self.pending_window_reset = None;
            }
        }
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_window_reset.is_some()
    }
}

/// Mock report dialog. Unrelated to the map, but it reuses the same window
/// state machine, which is exactly why the machine is its own module.
pub struct ReportDialogState {
    pub open: bool,
    pub window: WindowStateMachine,
    pub event: Option<OutbreakEvent>,
}

impl ReportDialogState {
    fn new() -> Self {
        Self {
            open: false,
            window: WindowStateMachine::new(WindowMode::Normal),
            event: None,
        }
    }

    pub fn open_for(&mut self, event: OutbreakEvent) {
        self.open = true;
        self.event = Some(event);
        self.window.reopen();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.event = None;
        self.window.reopen();
    }
}

// Core application state
pub struct AppState {
    pub store: GeoStore,
    pub current_screen: Screen,
    pub error_message: Option<String>,

    pub map_page: MapPageState,
    pub map_modal: MapModalState,
    pub report: ReportDialogState,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let store = GeoStore::load_embedded()?;
        let (start, end) = store
            .date_bounds()
            .ok_or_else(|| anyhow::anyhow!("Outbreak dataset is empty"))?;
        log::info!("Loaded {} outbreak events ({} to {})", store.len(), start, end);

        Ok(Self {
            store,
            current_screen: Screen::Overview,
            error_message: None,
            map_page: MapPageState::new(DateRange { start, end }),
            map_modal: MapModalState::new(),
            report: ReportDialogState::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DiseaseFilter;

    #[test]
    fn modal_open_resets_selection_and_window_but_keeps_filters() {
        let state = AppState::new().unwrap();
        let mut modal = state.map_modal;
        let event = state.store.get(1).unwrap().clone();
        let t0 = Instant::now();

        modal.open_with_selection(&event, t0);
        modal.filters.disease = DiseaseFilter::Only("Cholera".to_string());
        modal.window.toggle_maximize();
        modal.close(t0);

        modal.open();
        assert!(modal.selection.selected().is_none());
        assert_eq!(modal.window.mode(), WindowMode::Normal);
        assert_eq!(
            modal.filters.disease,
            DiseaseFilter::Only("Cholera".to_string())
        );
    }

    #[test]
    fn close_schedules_deferred_window_reset() {
        let state = AppState::new().unwrap();
        let mut modal = state.map_modal;
        let t0 = Instant::now();

        modal.open();
        modal.window.toggle_maximize();
        modal.close(t0);

        // Not yet due: the maximized mode is still held.
        modal.tick(t0 + Duration::from_millis(100));
        assert_eq!(modal.window.mode(), WindowMode::Maximized);
        assert!(modal.has_pending_reset());

        modal.tick(t0 + CLOSE_RESET_DELAY);
        assert_eq!(modal.window.mode(), WindowMode::Normal);
        assert!(!modal.has_pending_reset());
    }

    #[test]
    fn close_while_minimized_reopens_in_initial_mode() {
        let state = AppState::new().unwrap();
        let mut modal = state.map_modal;
        let t0 = Instant::now();

        modal.open();
        modal.window.minimize();
        modal.close(t0);
        // Reopen before the deferred reset fires; open() must reset anyway.
        modal.open();
        assert_eq!(modal.window.mode(), WindowMode::Normal);
    }

    #[test]
    fn close_drops_the_map_and_pending_work() {
        let state = AppState::new().unwrap();
        let mut modal = state.map_modal;
        let event = state.store.get(2).unwrap().clone();
        let t0 = Instant::now();

        modal.open_with_selection(&event, t0);
        assert!(modal.selection.has_pending());
        modal.close(t0);
        assert!(!modal.selection.has_pending());
        assert!(modal.map.is_none());
    }
}
