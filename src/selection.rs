// src/selection.rs
use std::time::{Duration, Instant};

use crate::data::OutbreakEvent;
use crate::map::{LatLng, MapController, DEFAULT_VIEWPORT, DETAIL_ZOOM};

/// Nominal delay before flying to a fresh selection, so the fly-to does not
/// race a concurrent open/resize animation.
pub const FLY_TO_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy)]
struct PendingFlyTo {
    event_id: u32,
    target: LatLng,
    due: Instant,
}

/// Holds the currently selected event and drives both sides of the
/// list/marker sync: the list highlight reads `selected()`, the map receives
/// deferred fly-to and immediate reset commands.
///
/// Selection is a clone of the event, deliberately: an event selected from a
/// list that bypasses the active filters must still render its detail panel
/// even though it is absent from the visible set.
#[derive(Debug)]
pub struct SelectionSync {
    selected: Option<OutbreakEvent>,
    pending: Option<PendingFlyTo>,
    fly_delay: Duration,
}

impl Default for SelectionSync {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSync {
    pub fn new() -> Self {
        Self::with_delay(FLY_TO_DELAY)
    }

    pub fn with_delay(fly_delay: Duration) -> Self {
        Self {
            selected: None,
            pending: None,
            fly_delay,
        }
    }

    pub fn selected(&self) -> Option<&OutbreakEvent> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_ref().map(|e| e.id)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// List-panel path. Sets the selection unconditionally, whether or not
    /// the event passes the active filters.
    pub fn select_from_list(&mut self, event: &OutbreakEvent, now: Instant) {
        self.select(event, now);
    }

    /// Marker-click path, wired to the map adapter's click report.
    pub fn select_from_marker(&mut self, event: &OutbreakEvent, now: Instant) {
        self.select(event, now);
    }

    fn select(&mut self, event: &OutbreakEvent, now: Instant) {
        self.selected = Some(event.clone());
        // A newer selection replaces any still-pending fly-to outright, so an
        // earlier timer can never land after a later one.
        self.pending = Some(PendingFlyTo {
            event_id: event.id,
            target: LatLng {
                lat: event.lat,
                lng: event.lng,
            },
            due: now + self.fly_delay,
        });
    }

    /// Clears the selection; on the transition to "nothing selected" the map
    /// returns to the shared default viewport.
    pub fn clear(&mut self, map: &mut dyn MapController) {
        self.pending = None;
        if self.selected.take().is_some() {
            map.set_view(DEFAULT_VIEWPORT.center, DEFAULT_VIEWPORT.zoom);
        }
    }

    /// Reset-view control and modal close: clear selection and always snap
    /// back to the default viewport.
    pub fn reset(&mut self, map: &mut dyn MapController) {
        self.pending = None;
        self.selected = None;
        map.set_view(DEFAULT_VIEWPORT.center, DEFAULT_VIEWPORT.zoom);
    }

    /// Drops selection and pending work without touching the map. Used when
    /// the owning dialog unmounts and the map handle is already gone.
    pub fn forget(&mut self) {
        self.cancel_pending();
        self.selected = None;
    }

    /// Cancels the deferred fly-to only, leaving the selection alone.
    /// Required when the owning dialog closes mid-animation.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Fires a due fly-to. Guarded: the timer only lands if its event is
    /// still the selected one, so an out-of-order timer cannot override a
    /// newer selection.
    pub fn tick(&mut self, now: Instant, map: &mut dyn MapController) {
        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.due {
            return;
        }
        self.pending = None;
        if self.selected_id() == Some(pending.event_id) {
            map.fly_to(pending.target, DETAIL_ZOOM);
        }
    }
}
