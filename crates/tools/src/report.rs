//! Plain-text rendering of panel content for the terminal.

use std::fmt::Write;

use layers::symbology::{DEFAULT_MARKER_COLOR, color_for};
use panels::{DetailField, ListEntry, RecordingSurface};

fn label(field: DetailField) -> &'static str {
    match field {
        DetailField::Region => "Region",
        DetailField::Latitude => "Latitude",
        DetailField::Longitude => "Longitude",
        DetailField::Depth => "Depth",
        DetailField::Magnitude => "Magnitude",
        DetailField::Time => "Time",
    }
}

/// One line per entry: index, marker color, then the five list fields.
pub fn list_table(entries: &[ListEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<7}  {:>5}  {:<19}  {:>9}  {:>10}  {}",
        "#", "color", "mag", "time", "lat", "lon", "region"
    );
    for e in entries {
        let color = e
            .event
            .magnitude
            .and_then(color_for)
            .unwrap_or(DEFAULT_MARKER_COLOR);
        let _ = writeln!(
            out,
            "{:>4}  {:<7}  {:>5}  {:<19}  {:>9}  {:>10}  {}",
            e.index,
            color.to_css(),
            e.magnitude,
            e.time,
            e.latitude,
            e.longitude,
            e.region
        );
    }
    out
}

/// Detail panel content as `label: value` lines. Nothing is printed when the
/// panel is hidden.
pub fn detail_card(surface: &RecordingSurface) -> String {
    if !surface.detail_visible {
        return String::new();
    }
    let mut out = String::new();
    for field in DetailField::ALL {
        let value = surface.field(field).unwrap_or_default();
        let _ = writeln!(out, "{:<10} {}", format!("{}:", label(field)), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{detail_card, list_table};
    use feed::SeismicEvent;
    use panels::{PanelPresenter, RecordingSurface, TimeDisplay};
    use pretty_assertions::assert_eq;

    fn event() -> SeismicEvent {
        SeismicEvent {
            id: Some("x".into()),
            magnitude: Some(5.2),
            latitude: Some(38.1),
            longitude: Some(20.4),
            depth_km: Some(7.0),
            region: Some("GREECE".into()),
            timestamp_ms: Some(0),
        }
    }

    fn presenter() -> PanelPresenter<RecordingSurface> {
        PanelPresenter::with_time_display(RecordingSurface::default(), TimeDisplay::utc())
    }

    #[test]
    fn card_lists_every_field() {
        let mut p = presenter();
        p.present(&event());
        assert_eq!(
            detail_card(p.surface()),
            "Region:    GREECE\n\
             Latitude:  38.1\n\
             Longitude: 20.4\n\
             Depth:     7 km\n\
             Magnitude: 5.2\n\
             Time:      1970-01-01 00:00:00\n"
        );

        p.hide();
        assert_eq!(detail_card(p.surface()), "");
    }

    #[test]
    fn table_has_header_and_one_row_per_entry() {
        let mut p = presenter();
        p.list_all(&[event(), SeismicEvent::default()]);
        let table = list_table(&p.surface().list);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("#f39c12"));
        assert!(lines[1].ends_with("GREECE"));
        assert!(lines[2].contains("#bdc3c7"));
    }
}
