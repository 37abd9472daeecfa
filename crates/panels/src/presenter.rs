use feed::SeismicEvent;
use tracing::debug;

use crate::format::{TimeDisplay, format_depth, format_number, format_timestamp};
use crate::surface::{DetailField, Drawer, ListEntry, PanelSurface};

/// Renders events into a [`PanelSurface`].
///
/// Performs no validation: a missing field renders as an empty string.
#[derive(Debug)]
pub struct PanelPresenter<S> {
    surface: S,
    time_display: TimeDisplay,
}

impl<S: PanelSurface> PanelPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self::with_time_display(surface, TimeDisplay::Local)
    }

    pub fn with_time_display(surface: S, time_display: TimeDisplay) -> Self {
        Self {
            surface,
            time_display,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fills the detail panel with `event` and shows it.
    pub fn present(&mut self, event: &SeismicEvent) {
        for field in DetailField::ALL {
            let text = self.detail_text(event, field);
            self.surface.set_detail_field(field, &text);
        }
        self.surface.set_detail_visible(true);
        self.surface.set_drawer_open(Drawer::Detail, true);
        debug!(id = ?event.id, "event presented");
    }

    pub fn hide(&mut self) {
        self.surface.set_detail_visible(false);
        self.surface.set_drawer_open(Drawer::Detail, false);
    }

    /// Replaces the list with one entry per event, in order.
    pub fn list_all(&mut self, events: &[SeismicEvent]) {
        self.surface.clear_list();
        for (index, event) in events.iter().enumerate() {
            let entry = self.list_entry(index, event);
            self.surface.push_list_entry(&entry);
        }
    }

    pub fn set_drawer(&mut self, drawer: Drawer, open: bool) {
        self.surface.set_drawer_open(drawer, open);
    }

    pub fn list_entry(&self, index: usize, event: &SeismicEvent) -> ListEntry {
        ListEntry {
            index,
            magnitude: format_number(event.magnitude),
            region: event.region.clone().unwrap_or_default(),
            time: format_timestamp(event.timestamp_ms, self.time_display),
            latitude: format_number(event.latitude),
            longitude: format_number(event.longitude),
            event: event.clone(),
        }
    }

    fn detail_text(&self, event: &SeismicEvent, field: DetailField) -> String {
        match field {
            DetailField::Region => event.region.clone().unwrap_or_default(),
            DetailField::Latitude => format_number(event.latitude),
            DetailField::Longitude => format_number(event.longitude),
            DetailField::Depth => format_depth(event.depth_km),
            DetailField::Magnitude => format_number(event.magnitude),
            DetailField::Time => format_timestamp(event.timestamp_ms, self.time_display),
        }
    }
}

/// In-memory surface that records what was written to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub detail: Vec<(DetailField, String)>,
    pub detail_visible: bool,
    pub list: Vec<ListEntry>,
    pub filter_open: bool,
    pub detail_open: bool,
}

impl RecordingSurface {
    pub fn field(&self, field: DetailField) -> Option<&str> {
        self.detail
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }
}

impl PanelSurface for RecordingSurface {
    fn set_detail_field(&mut self, field: DetailField, text: &str) {
        self.detail.retain(|(f, _)| *f != field);
        self.detail.push((field, text.to_string()));
    }

    fn set_detail_visible(&mut self, visible: bool) {
        self.detail_visible = visible;
    }

    fn clear_list(&mut self) {
        self.list.clear();
    }

    fn push_list_entry(&mut self, entry: &ListEntry) {
        self.list.push(entry.clone());
    }

    fn set_drawer_open(&mut self, drawer: Drawer, open: bool) {
        match drawer {
            Drawer::Filter => self.filter_open = open,
            Drawer::Detail => self.detail_open = open,
        }
    }
}
