//! Explicit application context.
//!
//! Everything the frame loop, the pointer handlers, the resize handler and
//! the filter form touch lives in one [`GlobeContext`]. Hosts own exactly one
//! and route every input through it.

use std::num::NonZeroU32;

use feed::{FeedQuery, FetchError, SeismicEvent};
use foundation::math::{FOCUS_RADIUS, Vec2, geodesy};
use layers::{ClickOutcome, MarkerId, MarkerSet, PickController};
use panels::{Drawer, PanelPresenter, PanelSurface};
use runtime::frame::Frame;
use runtime::viewport::{Viewport, ViewportLatch};
use scene::World;
use scene::camera::OrbitCamera;
use scene::entity::EntityId;
use scene::prefabs::spawn_globe;
use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::filter::{FilterError, parse_filter};

/// Radius of the globe body in scene units.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Handle for one in-flight feed request.
///
/// Only the most recently issued ticket is honored by
/// [`GlobeContext::apply_fetch`]; responses to older tickets are dropped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    query: FeedQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> FeedQuery {
        self.query
    }
}

/// What [`GlobeContext::apply_fetch`] did with a response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchApplied {
    /// Markers and list now show `count` events.
    Replaced { count: usize },
    /// The request failed; markers and list are empty.
    Failed,
    /// A newer request was issued after this one; nothing changed.
    Stale,
}

pub struct GlobeContext<S> {
    config: ViewerConfig,
    world: World,
    camera: OrbitCamera,
    viewport: ViewportLatch,
    markers: MarkerSet,
    pick: PickController,
    panels: PanelPresenter<S>,
    frame: Frame,
    latest_fetch: u64,
    suppressed: bool,
    drag_anchor: Option<Vec2>,
}

impl<S: PanelSurface> GlobeContext<S> {
    pub fn new(config: ViewerConfig, surface: S, viewport: Viewport) -> Self {
        let mut world = World::new();
        spawn_globe(&mut world, GLOBE_RADIUS);
        let mut camera = config.camera.build();
        camera.set_aspect(viewport.aspect());
        let markers = MarkerSet::new(config.marker_style());

        Self {
            config,
            world,
            camera,
            viewport: ViewportLatch::new(viewport),
            markers,
            pick: PickController::new(),
            panels: PanelPresenter::new(surface),
            frame: Frame::first(),
            latest_fetch: 0,
            suppressed: false,
            drag_anchor: None,
        }
    }

    pub fn with_presenter(mut self, panels: PanelPresenter<S>) -> Self {
        self.panels = panels;
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn pick(&self) -> &PickController {
        &self.pick
    }

    pub fn panels(&self) -> &PanelPresenter<S> {
        &self.panels
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Entities despawned since the last call, for the renderer to free.
    pub fn drain_released(&mut self) -> Vec<EntityId> {
        self.world.drain_released()
    }

    /// Query used for the first load and for blank filter fields.
    pub fn default_query(&self) -> FeedQuery {
        let limit = NonZeroU32::new(self.config.default_limit).unwrap_or(NonZeroU32::MIN);
        FeedQuery::new(limit, self.config.default_min_magnitude)
    }

    /// Starts the initial load with the configured defaults.
    pub fn start_load(&mut self) -> FetchTicket {
        self.issue_fetch(self.default_query())
    }

    /// Handles a filter form submission.
    ///
    /// On success the current markers are already gone and the returned
    /// ticket carries the query to run.
    pub fn submit_filter(
        &mut self,
        limit_text: &str,
        magnitude_text: &str,
    ) -> Result<FetchTicket, FilterError> {
        let query = parse_filter(limit_text, magnitude_text, self.default_query())?;
        Ok(self.issue_fetch(query))
    }

    /// Clears markers and selection, and supersedes every earlier ticket.
    pub fn issue_fetch(&mut self, query: FeedQuery) -> FetchTicket {
        self.markers.clear(&mut self.world);
        self.pick.reset();
        self.panels.hide();
        self.latest_fetch += 1;
        debug!(
            seq = self.latest_fetch,
            limit = query.limit.get(),
            min_mag = query.min_magnitude,
            "fetch issued"
        );
        FetchTicket {
            seq: self.latest_fetch,
            query,
        }
    }

    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SeismicEvent>, FetchError>,
    ) -> FetchApplied {
        if ticket.seq != self.latest_fetch {
            debug!(seq = ticket.seq, latest = self.latest_fetch, "dropping stale fetch");
            return FetchApplied::Stale;
        }

        self.pick.reset();
        match result {
            Ok(events) => {
                self.markers.replace_all(&mut self.world, &events);
                self.panels.list_all(&events);
                info!(count = events.len(), "events loaded");
                FetchApplied::Replaced {
                    count: events.len(),
                }
            }
            Err(err) => {
                warn!(error = %err, "event fetch failed");
                self.markers.clear(&mut self.world);
                self.panels.list_all(&[]);
                FetchApplied::Failed
            }
        }
    }

    /// Pointer moved to `(x_px, y_px)` in CSS pixels. Orbits the camera
    /// while a button is held.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) {
        if let Some(anchor) = self.drag_anchor {
            let height = self.viewport.current().height;
            self.camera.orbit(x_px - anchor.x, y_px - anchor.y, height);
            self.drag_anchor = Some(Vec2::new(x_px, y_px));
        }
        self.pick.on_pointer_move(x_px, y_px);
    }

    pub fn pointer_down(&mut self, x_px: f64, y_px: f64) {
        self.drag_anchor = Some(Vec2::new(x_px, y_px));
        self.pick.on_pointer_down();
    }

    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    /// Whether the pointer is over UI that must not dismiss the detail
    /// panel.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    pub fn click(&mut self) -> ClickOutcome {
        let outcome = self.pick.on_click(self.suppressed);
        match outcome {
            ClickOutcome::Selected(id) => self.present_marker(id),
            ClickOutcome::ClearedSelection { hide_panel: true } => self.panels.hide(),
            ClickOutcome::ClearedSelection { hide_panel: false } | ClickOutcome::Ignored => {}
        }
        outcome
    }

    /// Selection from the event list: looks at the event from
    /// `FOCUS_RADIUS` and shows its details, without any ray casting.
    pub fn select_from_list(&mut self, event: &SeismicEvent) {
        if let Some((lat, lon)) = event.coordinates() {
            self.camera.look_from(geodesy::project(lat, lon, FOCUS_RADIUS));
        }
        self.panels.present(event);
    }

    /// Selects the `index`-th event of the current set. Returns `false` if
    /// there is no such event.
    pub fn select_list_index(&mut self, index: usize) -> bool {
        let Some(event) = self.markers.iter().nth(index).map(|m| m.event.clone()) else {
            return false;
        };
        self.select_from_list(&event);
        true
    }

    pub fn set_drawer(&mut self, drawer: Drawer, open: bool) {
        self.panels.set_drawer(drawer, open);
    }

    /// Records a surface resize; it takes effect at the next [`tick`].
    ///
    /// [`tick`]: GlobeContext::tick
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.viewport.request(width, height, device_pixel_ratio);
    }

    pub fn orbit(&mut self, dx_px: f64, dy_px: f64) {
        let height = self.viewport.current().height;
        self.camera.orbit(dx_px, dy_px, height);
    }

    pub fn zoom(&mut self, delta: f64) {
        self.camera.zoom(delta);
    }

    /// One update step: pending resize, camera damping, hover picking.
    pub fn tick(&mut self, dt_s: f64) -> Frame {
        if let Some(vp) = self.viewport.apply_pending() {
            self.camera.set_aspect(vp.aspect());
        }
        self.camera.update();
        let viewport = self.viewport.current();
        self.pick
            .update(&mut self.world, &self.markers, &self.camera, &viewport);
        self.frame = self.frame.next(dt_s);
        self.frame
    }

    fn present_marker(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get(id) {
            self.panels.present(&marker.event);
        }
    }
}
