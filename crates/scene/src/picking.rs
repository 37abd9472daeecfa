use foundation::math::Vec3;
use foundation::math::precision::stable_total_cmp_f64;

use crate::World;
use crate::components::Shape3D;
use crate::entity::EntityId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    /// Distance along the normalized ray.
    pub distance: f64,
    pub point: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub max_distance: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            max_distance: 1.0e30,
        }
    }
}

/// Every pickable, visible drawable hit by `ray`, nearest first.
///
/// Ordering contract:
/// - Hits are sorted by distance along the (normalized) ray.
/// - Equal distances are ordered by ascending `EntityId::index()`.
///
/// Sphere radii are multiplied by the entity's current transform scale, so a
/// scaled-up drawable is easier to hit.
pub fn pick_ray_all(world: &World, ray: Ray, opts: PickOptions) -> Vec<PickHit> {
    let Some(dir) = ray.dir.normalized() else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for (entity, transform, drawable) in world.drawables_3d() {
        if !drawable.pickable {
            continue;
        }
        let Shape3D::Sphere { radius } = drawable.shape;
        let radius = radius * transform.scale;

        let Some(t) = ray_sphere_hit_t(ray.origin, dir, transform.position, radius) else {
            continue;
        };
        if t > opts.max_distance {
            continue;
        }
        hits.push(PickHit {
            entity,
            distance: t,
            point: ray.origin + dir * t,
        });
    }

    hits.sort_by(|a, b| {
        stable_total_cmp_f64(a.distance, b.distance)
            .then_with(|| a.entity.index().cmp(&b.entity.index()))
    });
    hits
}

/// Nearest hit along `ray`, if any.
pub fn pick_ray(world: &World, ray: Ray, opts: PickOptions) -> Option<PickHit> {
    pick_ray_all(world, ray, opts).into_iter().next()
}

/// Screen picking wrapper.
///
/// The caller supplies the screen->ray mapping via `make_ray`.
pub fn pick_screen<F>(
    world: &World,
    x_px: f64,
    y_px: f64,
    mut make_ray: F,
    opts: PickOptions,
) -> Vec<PickHit>
where
    F: FnMut(f64, f64) -> Option<Ray>,
{
    match make_ray(x_px, y_px) {
        Some(ray) => pick_ray_all(world, ray, opts),
        None => Vec::new(),
    }
}

/// Entry distance of a unit-direction ray into a sphere. A ray starting
/// inside the sphere reports its exit distance.
fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f64) -> Option<f64> {
    if radius <= 0.0 {
        return None;
    }
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}
