//! Drag-to-reorder tracking for the main list.
//!
//! The drag capability only reports index events; every hover over a new row
//! moves the entry immediately, so the row follows the pointer instead of
//! waiting for a drop.

use tracing::debug;

use super::AppController;

/// In-flight drag bookkeeping: the index currently holding the dragged entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragTrack {
    source: usize,
}

impl AppController {
    /// Start tracking a drag from `index`.
    pub fn begin_drag(&mut self, index: usize) {
        debug_assert!(index < self.deal_list.len());
        self.drag = Some(DragTrack { source: index });
    }

    /// React to the pointer hovering row `target`. A hover over the tracked
    /// index is a no-op; anything else relocates the entry and re-tracks it.
    pub fn hover_over(&mut self, target: usize) {
        let Some(track) = self.drag else {
            return;
        };
        if track.source == target {
            return;
        }
        self.deal_list.move_entry(track.source, target);
        self.drag = Some(DragTrack { source: target });
        debug!(from = track.source, to = target, "drag reorder");
    }

    /// Stop tracking. Moves already happened on hover, so there is nothing
    /// to apply.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Index currently holding the dragged entry, if a drag is active.
    pub fn dragging(&self) -> Option<usize> {
        self.drag.map(|track| track.source)
    }
}
