use crate::World;
use crate::components::{Drawable3D, Rgb, Transform};
use crate::entity::EntityId;

/// Ocean tint used when no globe texture is available.
pub const GLOBE_COLOR: Rgb = Rgb::from_hex(0x1b3a5c);

/// Spawns the globe body: a sphere of `radius` at the origin.
///
/// The globe is never pickable, so pointer rays pass through to the markers
/// on its surface.
pub fn spawn_globe(world: &mut World, radius: f64) -> EntityId {
    let entity = world.spawn();
    world.set_transform(entity, Transform::identity());
    world.set_drawable_3d(entity, Drawable3D::sphere(radius, GLOBE_COLOR).non_pickable());
    entity
}

#[cfg(test)]
mod tests {
    use super::spawn_globe;
    use crate::World;
    use crate::components::Shape3D;
    use crate::picking::{PickOptions, Ray, pick_ray};
    use foundation::math::Vec3;

    #[test]
    fn spawns_globe_drawable() {
        let mut world = World::new();
        let entity = spawn_globe(&mut world, 1.0);

        let drawables = world.drawables_3d();
        assert_eq!(drawables.len(), 1);
        assert_eq!(drawables[0].0, entity);
        assert_eq!(drawables[0].2.shape, Shape3D::Sphere { radius: 1.0 });
    }

    #[test]
    fn globe_does_not_block_picks() {
        let mut world = World::new();
        spawn_globe(&mut world, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick_ray(&world, ray, PickOptions::default()).is_none());
    }
}
