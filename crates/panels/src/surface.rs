use feed::SeismicEvent;

/// One text slot of the detail panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DetailField {
    Region,
    Latitude,
    Longitude,
    Depth,
    Magnitude,
    Time,
}

impl DetailField {
    pub const ALL: [DetailField; 6] = [
        DetailField::Region,
        DetailField::Latitude,
        DetailField::Longitude,
        DetailField::Depth,
        DetailField::Magnitude,
        DetailField::Time,
    ];

    /// Value of the `data-field` attribute marking this slot in markup.
    pub fn key(self) -> &'static str {
        match self {
            DetailField::Region => "region",
            DetailField::Latitude => "lat",
            DetailField::Longitude => "lon",
            DetailField::Depth => "depth",
            DetailField::Magnitude => "mag",
            DetailField::Time => "time",
        }
    }
}

/// Slide-in side panels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Drawer {
    Filter,
    Detail,
}

impl Drawer {
    pub fn key(self) -> &'static str {
        match self {
            Drawer::Filter => "filter",
            Drawer::Detail => "detail",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "filter" => Some(Drawer::Filter),
            "detail" => Some(Drawer::Detail),
            _ => None,
        }
    }
}

/// One row of the event list.
///
/// Carries the full event so the row can be selected on its own, without
/// going back to the marker set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Position in the list, matching the feed order.
    pub index: usize,
    pub magnitude: String,
    pub region: String,
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    pub event: SeismicEvent,
}

/// Where panel content ends up. The browser host implements this over the
/// DOM; the CLI and tests implement it in memory.
pub trait PanelSurface {
    fn set_detail_field(&mut self, field: DetailField, text: &str);
    fn set_detail_visible(&mut self, visible: bool);
    fn clear_list(&mut self);
    fn push_list_entry(&mut self, entry: &ListEntry);
    fn set_drawer_open(&mut self, drawer: Drawer, open: bool);
}
