use crate::components::{Drawable3D, Transform, Visibility};
use crate::entity::EntityId;
use foundation::handles::Handle;

/// Render scene: a slot-based store of entities and their components.
///
/// Slots are reused after [`World::despawn`]; each reuse bumps the slot's
/// generation so `EntityId`s held elsewhere go stale instead of aliasing the
/// new occupant. Despawned entities are queued in a release list that the
/// host renderer drains to free whatever it allocated for them.
#[derive(Debug, Default)]
pub struct World {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
    live_count: usize,
    transforms: Vec<Option<Transform>>,
    visibility: Vec<Option<Visibility>>,
    drawables_3d: Vec<Option<Drawable3D>>,
    released: Vec<EntityId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = self.generations.len() as u32;
                self.ensure_capacity(index as usize);
                index
            }
        };
        let idx = index as usize;
        self.alive[idx] = true;
        self.live_count += 1;
        EntityId(Handle::new(index, self.generations[idx]))
    }

    /// Removes `entity` and all of its components.
    ///
    /// Returns `false` if the entity was already gone.
    pub fn despawn(&mut self, entity: EntityId) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let idx = entity.index() as usize;
        self.alive[idx] = false;
        self.generations[idx] = self.generations[idx].wrapping_add(1);
        self.transforms[idx] = None;
        self.visibility[idx] = None;
        self.drawables_3d[idx] = None;
        self.free.push(entity.index());
        self.live_count -= 1;
        self.released.push(entity);
        true
    }

    pub fn is_alive(&self, entity: EntityId) -> bool {
        let idx = entity.index() as usize;
        self.alive.get(idx).copied().unwrap_or(false)
            && self.generations.get(idx).copied() == Some(entity.generation())
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.live_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        if let Some(idx) = self.live_index(entity) {
            self.transforms[idx] = Some(transform);
        }
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.live_index(entity).and_then(|idx| self.transforms[idx])
    }

    /// Sets the uniform scale of an entity that already has a transform.
    ///
    /// Returns `true` if the scale changed.
    pub fn set_scale(&mut self, entity: EntityId, scale: f64) -> bool {
        let Some(idx) = self.live_index(entity) else {
            return false;
        };
        match self.transforms[idx].as_mut() {
            Some(t) if t.scale != scale => {
                t.scale = scale;
                true
            }
            _ => false,
        }
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        if let Some(idx) = self.live_index(entity) {
            self.visibility[idx] = Some(visibility);
        }
    }

    pub fn is_visible(&self, entity: EntityId) -> bool {
        self.live_index(entity)
            .map(|idx| self.visible_at(idx))
            .unwrap_or(false)
    }

    pub fn set_drawable_3d(&mut self, entity: EntityId, drawable: Drawable3D) {
        if let Some(idx) = self.live_index(entity) {
            self.drawables_3d[idx] = Some(drawable);
        }
    }

    pub fn drawable_3d(&self, entity: EntityId) -> Option<Drawable3D> {
        self.live_index(entity).and_then(|idx| self.drawables_3d[idx])
    }

    /// Visible drawables with their transforms, in ascending slot order.
    pub fn drawables_3d(&self) -> Vec<(EntityId, Transform, Drawable3D)> {
        let mut out = Vec::new();
        for (idx, drawable) in self.drawables_3d.iter().enumerate() {
            let Some(drawable) = drawable else { continue };
            let Some(transform) = self.transforms[idx] else {
                continue;
            };
            if !self.alive[idx] || !self.visible_at(idx) {
                continue;
            }

            let id = EntityId(Handle::new(idx as u32, self.generations[idx]));
            out.push((id, transform, *drawable));
        }
        out
    }

    /// Takes the entities despawned since the last call.
    pub fn drain_released(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.released)
    }

    fn live_index(&self, entity: EntityId) -> Option<usize> {
        self.is_alive(entity).then_some(entity.index() as usize)
    }

    fn visible_at(&self, idx: usize) -> bool {
        self.visibility[idx].map(|v| v.visible).unwrap_or(true)
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.generations.len() <= idx {
            let new_len = idx + 1;
            self.generations.resize(new_len, 0);
            self.alive.resize(new_len, false);
            self.transforms.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.drawables_3d.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::{Drawable3D, Rgb, Transform, Visibility};
    use foundation::math::Vec3;

    fn spawn_sphere(world: &mut World, x: f64) -> crate::entity::EntityId {
        let entity = world.spawn();
        world.set_transform(entity, Transform::translate(Vec3::new(x, 0.0, 0.0)));
        world.set_drawable_3d(entity, Drawable3D::sphere(0.1, Rgb::WHITE));
        entity
    }

    #[test]
    fn spawn_and_collect_drawables() {
        let mut world = World::new();
        let entity = spawn_sphere(&mut world, 1.0);

        let drawables = world.drawables_3d();
        assert_eq!(drawables.len(), 1);
        assert_eq!(drawables[0].0, entity);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn hidden_entities_are_filtered() {
        let mut world = World::new();
        let entity = spawn_sphere(&mut world, 1.0);
        world.set_visibility(entity, Visibility::hidden());

        assert!(world.drawables_3d().is_empty());
        assert!(!world.is_visible(entity));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn despawn_releases_and_invalidates_handle() {
        let mut world = World::new();
        let a = spawn_sphere(&mut world, 1.0);

        assert!(world.despawn(a));
        assert!(!world.despawn(a));
        assert!(!world.is_alive(a));
        assert!(world.is_empty());
        assert_eq!(world.drain_released(), vec![a]);
        assert!(world.drain_released().is_empty());

        // The slot is reused under a new generation; the old id stays dead.
        let b = spawn_sphere(&mut world, 2.0);
        assert_eq!(b.index(), a.index());
        assert_ne!(b, a);
        assert!(world.transform(a).is_none());
        assert_eq!(world.transform(b).unwrap().position.x, 2.0);
    }

    #[test]
    fn set_scale_reports_changes() {
        let mut world = World::new();
        let a = spawn_sphere(&mut world, 1.0);
        assert!(world.set_scale(a, 2.0));
        assert!(!world.set_scale(a, 2.0));
        assert_eq!(world.transform(a).unwrap().scale, 2.0);

        world.despawn(a);
        assert!(!world.set_scale(a, 1.0));
    }
}
