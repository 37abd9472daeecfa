//! Event markers: one sphere in the scene per fetched event.

use feed::SeismicEvent;
use foundation::math::{MARKER_RADIUS, Vec3, geodesy};
use scene::World;
use scene::components::{Drawable3D, Rgb, Transform, Visibility};
use scene::entity::EntityId;
use tracing::debug;

use crate::symbology::{DEFAULT_MARKER_COLOR, MarkerStyle, color_for};

/// Stable reference to a marker.
///
/// Wraps the marker's scene entity, so an id from a previous fetch can never
/// resolve to a marker of the current one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub EntityId);

impl MarkerId {
    pub fn entity(self) -> EntityId {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub event: SeismicEvent,
    /// Palette color, `None` when the magnitude has no bucket.
    pub color: Option<Rgb>,
    /// Position on the globe surface, `None` when the event has no
    /// coordinates.
    pub position: Option<Vec3>,
}

impl Marker {
    pub fn entity(&self) -> EntityId {
        self.id.0
    }

    pub fn display_color(&self) -> Rgb {
        self.color.unwrap_or(DEFAULT_MARKER_COLOR)
    }
}

/// The markers of the most recently applied fetch, in feed order.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    style: MarkerStyle,
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            style,
            markers: Vec::new(),
        }
    }

    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Despawns every current marker, then spawns one marker per event in
    /// order.
    ///
    /// Events without coordinates still get a marker so list positions and
    /// marker positions line up, but it is hidden and never pickable.
    pub fn replace_all(&mut self, world: &mut World, events: &[SeismicEvent]) {
        self.clear(world);
        self.markers.reserve(events.len());
        for event in events {
            let marker = self.spawn_marker(world, event);
            self.markers.push(marker);
        }
        debug!(count = self.markers.len(), "markers replaced");
    }

    /// Despawns every marker without replacement.
    pub fn clear(&mut self, world: &mut World) {
        for marker in self.markers.drain(..) {
            world.despawn(marker.id.0);
        }
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn by_entity(&self, entity: EntityId) -> Option<&Marker> {
        self.get(MarkerId(entity))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn spawn_marker(&self, world: &mut World, event: &SeismicEvent) -> Marker {
        let entity = world.spawn();
        let color = event.magnitude.and_then(color_for);
        let position = event
            .coordinates()
            .map(|(lat, lon)| geodesy::project(lat, lon, MARKER_RADIUS));

        let drawable = Drawable3D::sphere(self.style.radius, color.unwrap_or(DEFAULT_MARKER_COLOR));
        match position {
            Some(p) => {
                world.set_transform(entity, Transform::translate(p));
                world.set_drawable_3d(entity, drawable);
            }
            None => {
                world.set_transform(entity, Transform::identity());
                world.set_drawable_3d(entity, drawable.non_pickable());
                world.set_visibility(entity, Visibility::hidden());
            }
        }

        Marker {
            id: MarkerId(entity),
            event: event.clone(),
            color,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerSet;
    use crate::symbology::{MAGNITUDE_PALETTE, MarkerStyle};
    use feed::SeismicEvent;
    use foundation::math::geodesy;
    use scene::World;

    fn event(id: &str, mag: f64, lat: f64, lon: f64) -> SeismicEvent {
        SeismicEvent {
            id: Some(id.into()),
            magnitude: Some(mag),
            latitude: Some(lat),
            longitude: Some(lon),
            ..SeismicEvent::default()
        }
    }

    #[test]
    fn replace_all_spawns_one_marker_per_event_in_order() {
        let mut world = World::new();
        let mut set = MarkerSet::new(MarkerStyle::default());
        let events = vec![event("a", 4.2, 10.0, 20.0), event("b", 0.5, -5.0, 100.0)];

        set.replace_all(&mut world, &events);

        assert_eq!(set.len(), 2);
        assert_eq!(world.len(), 2);
        let ids: Vec<_> = set.iter().map(|m| m.event.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let first = set.iter().next().unwrap();
        assert_eq!(first.color, Some(MAGNITUDE_PALETTE[4]));
        assert_eq!(first.position, Some(geodesy::project(10.0, 20.0, 1.0)));
        assert_eq!(
            world.transform(first.entity()).unwrap().position,
            geodesy::project(10.0, 20.0, 1.0)
        );
    }

    #[test]
    fn second_replace_leaves_only_the_second_set() {
        let mut world = World::new();
        let mut set = MarkerSet::default();
        set.replace_all(&mut world, &[event("a", 1.0, 0.0, 0.0), event("b", 2.0, 0.0, 1.0)]);
        let old: Vec<_> = set.iter().map(|m| m.id).collect();

        set.replace_all(&mut world, &[event("c", 3.0, 1.0, 1.0)]);

        assert_eq!(set.len(), 1);
        assert_eq!(world.len(), 1);
        assert_eq!(world.drain_released().len(), 2);
        for id in old {
            assert!(set.get(id).is_none());
            assert!(!world.is_alive(id.entity()));
        }
    }

    #[test]
    fn clear_releases_everything() {
        let mut world = World::new();
        let mut set = MarkerSet::default();
        set.replace_all(&mut world, &[event("a", 1.0, 0.0, 0.0)]);
        set.clear(&mut world);

        assert!(set.is_empty());
        assert!(world.is_empty());
        assert_eq!(world.drain_released().len(), 1);
    }

    #[test]
    fn event_without_coordinates_is_hidden_and_unpickable() {
        let mut world = World::new();
        let mut set = MarkerSet::default();
        let blank = SeismicEvent {
            magnitude: Some(12.0),
            ..SeismicEvent::default()
        };
        set.replace_all(&mut world, &[blank]);

        let marker = set.iter().next().unwrap();
        assert_eq!(marker.position, None);
        assert_eq!(marker.color, None);
        assert!(!world.is_visible(marker.entity()));
        assert!(!world.drawable_3d(marker.entity()).unwrap().pickable);
        assert!(set.by_entity(marker.entity()).is_some());
    }
}
