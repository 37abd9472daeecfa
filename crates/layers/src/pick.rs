//! Pointer-driven hover and click selection of markers.
//!
//! Hover is recomputed every frame from the last pointer position. Selection
//! only changes on a click that was not the end of a drag.

use runtime::viewport::Viewport;
use scene::World;
use scene::camera::OrbitCamera;
use scene::picking::{PickOptions, pick_screen};
use scene::pointer::PointerTracker;
use scene::selection::SelectionState;
use tracing::trace;

use crate::markers::{MarkerId, MarkerSet};

/// What a click did to the selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click ended a drag; nothing changed.
    Ignored,
    /// The hovered marker became the selection.
    Selected(MarkerId),
    /// The click landed on empty space and cleared the selection.
    ClearedSelection {
        /// `false` when the pointer was over a panel that suppresses picking.
        hide_panel: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PickController {
    pointer: PointerTracker,
    selection: SelectionState<MarkerId>,
}

impl PickController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, x_px: f64, y_px: f64) {
        self.pointer.move_to(x_px, y_px);
    }

    pub fn on_pointer_down(&mut self) {
        self.pointer.press();
    }

    pub fn hovered(&self) -> Option<MarkerId> {
        self.selection.hovered()
    }

    pub fn selected(&self) -> Option<MarkerId> {
        self.selection.selected()
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    /// Per-frame hit test.
    ///
    /// Every marker under the pointer is scaled up by the set's hover scale
    /// and every other marker is reset to scale 1. The nearest hit becomes
    /// the hover target.
    pub fn update(
        &mut self,
        world: &mut World,
        markers: &MarkerSet,
        camera: &OrbitCamera,
        viewport: &Viewport,
    ) {
        // The globe is not an occluder here: markers on its far side are hit
        // and scaled like any other, even though the renderer culls them.
        let hits = match self.pointer.position() {
            Some(p) => pick_screen(
                world,
                p.x,
                p.y,
                |x, y| {
                    let (nx, ny) = viewport.to_ndc(x, y);
                    Some(camera.ray_through_ndc(nx, ny))
                },
                PickOptions::default(),
            ),
            None => Vec::new(),
        };

        let hover_scale = markers.style().hover_scale;
        for marker in markers.iter() {
            let hit = hits.iter().any(|h| h.entity == marker.entity());
            world.set_scale(marker.entity(), if hit { hover_scale } else { 1.0 });
        }

        let nearest = hits
            .iter()
            .find_map(|h| markers.by_entity(h.entity))
            .map(|m| m.id);
        if self.selection.set_hovered(nearest) {
            trace!(hovered = ?nearest, "hover changed");
        }
    }

    /// Resolves a click against the current hover target.
    ///
    /// `suppressed` is true while the pointer is over UI that should not
    /// dismiss the detail panel.
    pub fn on_click(&mut self, suppressed: bool) -> ClickOutcome {
        if !self.pointer.is_click() {
            return ClickOutcome::Ignored;
        }
        match self.selection.hovered() {
            Some(id) => {
                self.selection.set_selected(Some(id));
                trace!(selected = ?id, "marker selected");
                ClickOutcome::Selected(id)
            }
            None => {
                self.selection.set_selected(None);
                trace!("selection cleared");
                ClickOutcome::ClearedSelection {
                    hide_panel: !suppressed,
                }
            }
        }
    }

    /// Forgets hover and selection; the pointer position is kept.
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}
